//! Rules engine for simultaneous chess.
//!
//! Both players submit one move for the same turn; the engine adjudicates the
//! pair into a single next state. This crate provides:
//! - [`GameState`] - immutable snapshot of piece placement and captures
//! - [`MoveStrategy`] and [`MoveMatrix`] - pseudo-legal move generation
//! - [`legality`] - filtering of moves that would expose the mover's king
//! - [`resolve`] - adjudication of one move per player into an [`Outcome`]
//! - [`GameStatus`] - check, checkmate and stalemate per player
//! - [`RuleSet`] - the variant capability, with [`RegularRules`] for 8x8 play
//! - [`Game`] - append-only history with the two-phase submit/commit protocol
//!
//! # Example
//!
//! ```
//! use simul_engine::{Game, Submission};
//!
//! let mut game = Game::new();
//! let white = game.legal_moves_for(simul_core::Player::White)[0].clone();
//! let black = game.legal_moves_for(simul_core::Player::Black)[0].clone();
//!
//! assert!(matches!(game.submit(white).unwrap(), Submission::Pending));
//! assert!(matches!(game.submit(black).unwrap(), Submission::Committed(_)));
//! assert_eq!(game.turn(), 1);
//! ```

mod game;
pub mod legality;
pub mod movegen;
mod outcome;
pub mod resolve;
pub mod rules;
mod state;
mod status;
mod turn;

pub use game::{Game, GameError, Submission};
pub use movegen::{MoveMatrix, MoveStrategy};
pub use outcome::Outcome;
pub use resolve::{adjudicate, resolve, Interaction, Resolution};
pub use rules::{RegularRules, RuleSet};
pub use state::{GameState, StateError};
pub use status::{evaluate_status, DrawReason, GameResult, GameStatus, PlayerStatus};
pub use turn::PendingTurn;
