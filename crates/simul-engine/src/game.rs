//! Full game management with turn history.
//!
//! The [`Game`] struct ties the engine together:
//! - an append-only history of [`Outcome`]s, whose last entry is the
//!   current state
//! - legal-move queries against the current state
//! - the two-phase turn protocol: moves are collected per player and the
//!   turn is committed atomically once both are in
//! - resignation

use crate::legality::{legal_moves, legal_moves_for_piece};
use crate::resolve::resolve;
use crate::rules::{RegularRules, RuleSet};
use crate::status::evaluate_status;
use crate::{GameState, GameStatus, MoveMatrix, Outcome, PendingTurn, PlayerStatus, StateError};
use simul_core::{Move, Piece, Player};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal in the current state.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
    /// The rules produced an invalid starting state.
    #[error("invalid initial state: {0}")]
    State(#[from] StateError),
}

/// What happened to a submitted move.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission<'a> {
    /// The move is buffered; the other player has not submitted yet.
    Pending,
    /// Both moves were in and the turn was committed.
    Committed(&'a Outcome),
}

/// A simultaneous chess game with its full history.
///
/// The history always starts with an entry for the initial state, so there
/// is always a current state and a current status.
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = RegularRules> {
    rules: R,
    outcomes: Vec<Outcome>,
    pending: PendingTurn,
}

impl Default for Game<RegularRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<RegularRules> {
    /// Creates a new game with the regular 8x8 layout.
    pub fn new() -> Self {
        Self::with_rules(RegularRules).expect("regular layout is valid")
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game for the given rules.
    pub fn with_rules(rules: R) -> Result<Self, GameError> {
        let state = rules.initial_state()?;
        Ok(Self::from_state(rules, state))
    }

    /// Creates a game starting from an arbitrary snapshot.
    pub fn from_state(rules: R, state: GameState) -> Self {
        let status = evaluate_status(&rules, &state);
        Game {
            rules,
            outcomes: vec![Outcome::initial(state, status)],
            pending: PendingTurn::new(),
        }
    }

    /// Returns the rules in play.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the latest outcome.
    pub fn last_outcome(&self) -> &Outcome {
        self.outcomes
            .last()
            .expect("history always holds the initial outcome")
    }

    /// Returns the current snapshot.
    pub fn current_state(&self) -> &GameState {
        self.last_outcome().state()
    }

    /// Returns the status recorded by the latest outcome.
    pub fn status(&self) -> GameStatus {
        self.last_outcome().status()
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the full history, starting with the initial entry.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the number of committed turns.
    pub fn turn(&self) -> usize {
        self.outcomes.len() - 1
    }

    /// Returns the snapshot after `turn` turns (0 is the initial state).
    pub fn state_at(&self, turn: usize) -> Option<&GameState> {
        self.outcomes.get(turn).map(Outcome::state)
    }

    /// Returns the legal moves of `piece` in the current state.
    ///
    /// Empty for captured or unknown pieces.
    pub fn legal_moves(&self, piece: &Piece) -> Vec<Move> {
        legal_moves_for_piece(&self.rules, self.current_state(), piece)
    }

    /// Returns every legal move of `player` in the current state.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        legal_moves(&self.rules, self.current_state(), player)
    }

    /// Returns the pseudo-legal move matrix of the current state.
    pub fn move_matrix(&self) -> MoveMatrix {
        MoveMatrix::generate(&self.rules, self.current_state())
    }

    /// Returns `player`'s buffered move for the pending turn.
    pub fn pending(&self, player: Player) -> Option<&Move> {
        self.pending.get(player)
    }

    /// Submits a move for its mover's player.
    ///
    /// Replaces any move that player already submitted for this turn. Once
    /// both players have a move in, the turn is resolved and committed, and
    /// the new outcome is returned.
    pub fn submit(&mut self, m: Move) -> Result<Submission<'_>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        // Pieces match by designation, so the claimed player and kind are
        // checked separately. The engine's own copy is what gets buffered.
        let m = match self.legal_moves(m.piece()).into_iter().find(|l| *l == m) {
            Some(legal) if is_same_piece(legal.piece(), m.piece()) => legal,
            _ => return Err(GameError::IllegalMove(m.to_string())),
        };

        let player = m.player();
        if let Some(replaced) = self.pending.submit(m) {
            tracing::trace!(%player, %replaced, "replaced pending move");
        }

        match self.pending.take_pair() {
            Some(pair) => Ok(Submission::Committed(self.commit(pair))),
            None => {
                tracing::trace!(%player, "move buffered, waiting for opponent");
                Ok(Submission::Pending)
            }
        }
    }

    /// Withdraws `player`'s pending move.
    pub fn withdraw(&mut self, player: Player) -> Option<Move> {
        let withdrawn = self.pending.withdraw(player);
        if withdrawn.is_some() {
            tracing::trace!(%player, "pending move withdrawn");
        }
        withdrawn
    }

    /// Resigns the game for `player`.
    ///
    /// Appends an outcome without moves that marks `player` as resigned and
    /// discards any pending moves.
    pub fn resign(&mut self, player: Player) -> Result<&Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.pending.clear();

        let state = self.current_state().clone();
        let status = self.status().with(player, PlayerStatus::Resigned);
        tracing::info!(%player, turn = self.turn(), "player resigned");
        self.outcomes.push(Outcome::status_change(state, status));
        Ok(self.last_outcome())
    }

    fn commit(&mut self, pair: [Move; 2]) -> &Outcome {
        let outcome = resolve(&self.rules, self.current_state(), pair);
        let turn = self.outcomes.len();
        tracing::debug!(turn, status = %outcome.status(), "turn committed");
        if let Some(result) = outcome.status().result() {
            tracing::info!(turn, ?result, "game over");
        }
        self.outcomes.push(outcome);
        self.last_outcome()
    }
}

fn is_same_piece(live: &Piece, claimed: &Piece) -> bool {
    live.player() == claimed.player() && live.kind() == claimed.kind()
}
