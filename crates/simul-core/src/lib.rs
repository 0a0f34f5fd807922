//! Core types for simultaneous chess.
//!
//! This crate provides the value types shared by the engine and its
//! collaborators:
//! - [`Player`] with the orientation data pawns need
//! - [`PieceKind`] and [`Piece`], where a piece carries a stable identity
//! - [`Position`], [`Offset`] and [`BoardDimensions`] for board coordinates
//! - [`Move`] for a single submitted or performed move

mod error;
mod mov;
mod piece;
mod player;
mod position;

pub use error::ParseError;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use player::Player;
pub use position::{BoardDimensions, Offset, Position};
