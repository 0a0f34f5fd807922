//! Resolved turns.

use crate::resolve::Interaction;
use crate::{GameState, GameStatus};
use simul_core::Move;

/// The record of one turn: what was asked for, what happened, and where it
/// left the game. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    requested: Vec<Move>,
    performed: Vec<Move>,
    interaction: Option<Interaction>,
    state: GameState,
    status: GameStatus,
}

impl Outcome {
    /// The starting entry of a history: no moves, the initial snapshot.
    pub(crate) fn initial(state: GameState, status: GameStatus) -> Self {
        Outcome {
            requested: Vec::new(),
            performed: Vec::new(),
            interaction: None,
            state,
            status,
        }
    }

    pub(crate) fn resolved(
        requested: Vec<Move>,
        performed: Vec<Move>,
        interaction: Interaction,
        state: GameState,
        status: GameStatus,
    ) -> Self {
        Outcome {
            requested,
            performed,
            interaction: Some(interaction),
            state,
            status,
        }
    }

    /// A turn in which nothing moved but the status changed out of band.
    pub(crate) fn status_change(state: GameState, status: GameStatus) -> Self {
        Self::initial(state, status)
    }

    /// Returns the submitted moves, one per player.
    pub fn requested(&self) -> &[Move] {
        &self.requested
    }

    /// Returns the moves actually committed, including forced captures.
    pub fn performed(&self) -> &[Move] {
        &self.performed
    }

    /// Returns how the submitted moves interacted, if any were submitted.
    pub fn interaction(&self) -> Option<Interaction> {
        self.interaction
    }

    /// Returns the snapshot after this turn.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns both players' statuses after this turn.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}
