//! Buffering of the moves submitted for the pending turn.

use simul_core::{Move, Player};

/// The collect phase of a turn.
///
/// Holds at most one move per player. Either player may replace or withdraw
/// their move any number of times; the pair is released only once both are
/// present, and releasing it empties the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingTurn {
    moves: [Option<Move>; 2],
}

impl PendingTurn {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `m` for its mover's player, returning the move it replaced.
    pub fn submit(&mut self, m: Move) -> Option<Move> {
        let slot = &mut self.moves[m.player().index()];
        slot.replace(m)
    }

    /// Removes and returns `player`'s pending move.
    pub fn withdraw(&mut self, player: Player) -> Option<Move> {
        self.moves[player.index()].take()
    }

    /// Returns `player`'s pending move.
    pub fn get(&self, player: Player) -> Option<&Move> {
        self.moves[player.index()].as_ref()
    }

    /// Returns true once both players have a pending move.
    pub fn is_complete(&self) -> bool {
        self.moves.iter().all(Option::is_some)
    }

    /// Takes both moves, White's first, if both are present.
    ///
    /// Leaves the buffer untouched and returns `None` otherwise.
    pub fn take_pair(&mut self) -> Option<[Move; 2]> {
        if !self.is_complete() {
            return None;
        }
        match (self.moves[0].take(), self.moves[1].take()) {
            (Some(white), Some(black)) => Some([white, black]),
            _ => None,
        }
    }

    /// Drops both pending moves.
    pub fn clear(&mut self) {
        self.moves = [None, None];
    }
}
