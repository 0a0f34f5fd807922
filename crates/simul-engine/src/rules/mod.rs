//! Rule set abstraction for simultaneous chess variants.
//!
//! This module provides the [`RuleSet`] trait which abstracts over board
//! size, starting layout and per-kind move generation. The engine is
//! variant-agnostic: it receives a rule set at construction and delegates
//! everything variant-specific to it.

mod regular;

pub use regular::{regular_initial_pieces, RegularRules, FEALTY};

use crate::movegen::{self, MoveStrategy};
use crate::{GameState, StateError};
use simul_core::{BoardDimensions, Move, Piece, PieceKind, Position};

/// Trait for implementing simultaneous chess variants.
///
/// Only [`dimensions`](RuleSet::dimensions) and
/// [`initial_pieces`](RuleSet::initial_pieces) are required; the remaining
/// methods default to the standard behaviour and may be overridden.
///
/// # Example
///
/// ```
/// use simul_engine::{RegularRules, RuleSet};
///
/// let state = RegularRules.initial_state().unwrap();
/// assert_eq!(state.live_count(), 32);
/// ```
pub trait RuleSet {
    /// Returns the playing area.
    fn dimensions(&self) -> BoardDimensions;

    /// Returns every piece with its starting square.
    fn initial_pieces(&self) -> Vec<(Piece, Position)>;

    /// Builds the starting snapshot.
    fn initial_state(&self) -> Result<GameState, StateError> {
        GameState::new(self.dimensions(), self.initial_pieces())
    }

    /// Returns how pieces of `kind` move.
    fn strategy(&self, kind: PieceKind) -> MoveStrategy {
        MoveStrategy::standard(kind)
    }

    /// Generates pseudo-legal moves for `piece`.
    ///
    /// Returns an empty list for captured or unknown pieces.
    fn possible_moves(&self, piece: &Piece, state: &GameState) -> Vec<Move> {
        match state.live_piece(piece) {
            Some(piece) => movegen::generate(self.strategy(piece.kind()), piece, state),
            None => Vec::new(),
        }
    }

    /// Returns true if `m` would capture a king.
    fn is_checking(&self, m: &Move) -> bool {
        m.captured()
            .is_some_and(|captured| captured.kind() == PieceKind::King)
    }
}

impl<R: RuleSet + ?Sized> RuleSet for &R {
    fn dimensions(&self) -> BoardDimensions {
        (**self).dimensions()
    }

    fn initial_pieces(&self) -> Vec<(Piece, Position)> {
        (**self).initial_pieces()
    }

    fn initial_state(&self) -> Result<GameState, StateError> {
        (**self).initial_state()
    }

    fn strategy(&self, kind: PieceKind) -> MoveStrategy {
        (**self).strategy(kind)
    }

    fn possible_moves(&self, piece: &Piece, state: &GameState) -> Vec<Move> {
        (**self).possible_moves(piece, state)
    }

    fn is_checking(&self, m: &Move) -> bool {
        (**self).is_checking(m)
    }
}
