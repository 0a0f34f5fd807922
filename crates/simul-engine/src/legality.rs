//! Filtering pseudo-legal moves down to legal ones.
//!
//! A move is legal when, after playing it alone on the current snapshot, no
//! move of the opponent would capture the mover's king. The check is a direct
//! simulation: apply the candidate, regenerate every opposing move, and look
//! for one that takes a king.

use crate::rules::RuleSet;
use crate::{GameState, MoveMatrix};
use simul_core::{Move, Piece, Player};
use std::slice;

/// Returns true if playing `m` would leave the mover's king capturable.
pub fn exposes_king<R: RuleSet + ?Sized>(rules: &R, state: &GameState, m: &Move) -> bool {
    let next = state.apply(slice::from_ref(m));
    let opponent = m.player().opposite();
    let exposed = next.pieces_of(opponent).any(|(piece, _)| {
        rules
            .possible_moves(piece, &next)
            .iter()
            .any(|reply| rules.is_checking(reply))
    });
    exposed
}

/// Keeps the candidates that do not expose the mover's king.
pub fn filter_legal<R: RuleSet + ?Sized>(
    rules: &R,
    state: &GameState,
    candidates: Vec<Move>,
) -> Vec<Move> {
    candidates
        .into_iter()
        .filter(|m| !exposes_king(rules, state, m))
        .collect()
}

/// Returns the legal moves of one piece. Empty for captured or unknown pieces.
///
/// Moves are generated for the live piece with the same designation, so the
/// player and kind of `piece` itself are never trusted.
pub fn legal_moves_for_piece<R: RuleSet + ?Sized>(
    rules: &R,
    state: &GameState,
    piece: &Piece,
) -> Vec<Move> {
    let Some(piece) = state.live_piece(piece) else {
        return Vec::new();
    };
    filter_legal(rules, state, rules.possible_moves(piece, state))
}

/// Returns every legal move of `player`, grouped by piece.
pub fn legal_moves<R: RuleSet + ?Sized>(rules: &R, state: &GameState, player: Player) -> Vec<Move> {
    state
        .pieces_of(player)
        .flat_map(|(piece, _)| legal_moves_for_piece(rules, state, piece))
        .collect()
}

/// Returns true if `player` has at least one legal move.
pub fn has_legal_move<R: RuleSet + ?Sized>(rules: &R, state: &GameState, player: Player) -> bool {
    state.pieces_of(player).any(|(piece, _)| {
        rules
            .possible_moves(piece, state)
            .iter()
            .any(|m| !exposes_king(rules, state, m))
    })
}

/// Returns true if any opposing piece could capture `player`'s king.
///
/// A player without a live king is not considered checked.
pub fn is_checked<R: RuleSet + ?Sized>(rules: &R, state: &GameState, player: Player) -> bool {
    let Some((_, king_square)) = state.king_of(player) else {
        return false;
    };
    MoveMatrix::for_player(rules, state, player.opposite()).is_threatened(king_square)
}
