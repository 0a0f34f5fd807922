//! Adjudication of simultaneous moves.
//!
//! Each turn both players submit one legal move against the same snapshot.
//! [`adjudicate`] decides which of them are performed, and how, when the two
//! moves interact; [`resolve`] then commits the performed moves as a single
//! batch and computes the resulting status.
//!
//! The first matching rule wins:
//!
//! 1. Both moves target the same square: the higher-ranked mover takes the
//!    square and captures the other mover. Equal ranks bounce, so neither
//!    move is performed.
//! 2. Each move captures the other's mover: both are performed and both
//!    movers are removed.
//! 3. One move captures the other's mover: if the attacker outranks its
//!    target, only the attack is performed and the target is taken where it
//!    stood. If the target outranks the attacker, the target escapes: both
//!    moves are performed and the attack lands on the vacated square without
//!    a capture. Equal ranks bounce.
//! 4. Otherwise both moves are performed independently.
//!
//! Ranks follow [`PieceKind`](simul_core::PieceKind)'s ordering.

use crate::rules::RuleSet;
use crate::status::evaluate_status;
use crate::{GameState, Outcome};
use simul_core::{Move, Player};
use std::cmp::Ordering;
use std::fmt;

/// How the two submitted moves of a turn interacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The moves did not affect each other.
    Independent,
    /// Both moves targeted the same square. `winner` is `None` on equal rank.
    Contested { winner: Option<Player> },
    /// Each move captured the other's mover.
    MutualCapture,
    /// `attacker`'s move captured the other mover. `winner` is `None` on
    /// equal rank.
    OneSided {
        attacker: Player,
        winner: Option<Player>,
    },
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::Independent => write!(f, "independent"),
            Interaction::Contested { winner: Some(w) } => write!(f, "contested, {} wins", w),
            Interaction::Contested { winner: None } => write!(f, "contested, bounced"),
            Interaction::MutualCapture => write!(f, "mutual capture"),
            Interaction::OneSided {
                attacker,
                winner: Some(w),
            } => write!(f, "{} attacks, {} wins", attacker, w),
            Interaction::OneSided {
                attacker,
                winner: None,
            } => write!(f, "{} attacks, bounced", attacker),
        }
    }
}

/// The moves chosen for commit and the interaction that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Moves to perform, White's first. Zero, one or two entries.
    pub performed: Vec<Move>,
    /// How the pair interacted.
    pub interaction: Interaction,
}

/// Decides which of the two submitted moves are performed.
///
/// # Panics
///
/// Panics if both moves belong to the same player. Callers must pair exactly
/// one move per player.
pub fn adjudicate(first: &Move, second: &Move) -> Resolution {
    assert_ne!(
        first.player(),
        second.player(),
        "simultaneous moves must come from different players"
    );

    let (mut performed, interaction) = if first.to() == second.to() {
        let (performed, winner) = contest(first, second);
        (performed, Interaction::Contested { winner })
    } else if first.captures(second.piece()) && second.captures(first.piece()) {
        (
            vec![first.clone(), second.clone()],
            Interaction::MutualCapture,
        )
    } else if first.captures(second.piece()) {
        let (performed, winner) = pursue(first, second);
        let attacker = first.player();
        (performed, Interaction::OneSided { attacker, winner })
    } else if second.captures(first.piece()) {
        let (performed, winner) = pursue(second, first);
        let attacker = second.player();
        (performed, Interaction::OneSided { attacker, winner })
    } else {
        (vec![first.clone(), second.clone()], Interaction::Independent)
    };

    performed.sort_by_key(Move::player);
    Resolution {
        performed,
        interaction,
    }
}

/// Both movers head for the same square.
fn contest(first: &Move, second: &Move) -> (Vec<Move>, Option<Player>) {
    match first.piece().kind().cmp(&second.piece().kind()) {
        Ordering::Greater => (
            vec![first.as_capture_of(second.piece().clone())],
            Some(first.player()),
        ),
        Ordering::Less => (
            vec![second.as_capture_of(first.piece().clone())],
            Some(second.player()),
        ),
        Ordering::Equal => (Vec::new(), None),
    }
}

/// `attack` captures the mover of `target`, which is not capturing back.
fn pursue(attack: &Move, target: &Move) -> (Vec<Move>, Option<Player>) {
    match attack.piece().kind().cmp(&target.piece().kind()) {
        Ordering::Greater => (vec![attack.clone()], Some(attack.player())),
        Ordering::Less => (
            vec![attack.without_capture(), target.clone()],
            Some(target.player()),
        ),
        Ordering::Equal => (Vec::new(), None),
    }
}

/// Adjudicates one move per player against `state` and commits the result.
///
/// Both moves must be legal in `state`. The returned outcome lists `moves` as
/// requested (in the given order), the performed moves with any forced
/// capture, the new snapshot and both players' statuses.
///
/// # Panics
///
/// Panics if both moves belong to the same player.
pub fn resolve<R: RuleSet + ?Sized>(rules: &R, state: &GameState, moves: [Move; 2]) -> Outcome {
    let [first, second] = &moves;
    let Resolution {
        performed,
        interaction,
    } = adjudicate(first, second);

    tracing::debug!(
        requested = %format_moves(&moves),
        performed = %format_moves(&performed),
        %interaction,
        "resolved simultaneous moves"
    );

    let next = state.apply(&performed);
    let status = evaluate_status(rules, &next);
    Outcome::resolved(moves.into(), performed, interaction, next, status)
}

fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "-".to_string();
    }
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
