//! Errors raised when parsing core types from text.

use thiserror::Error;

/// Errors that can occur when parsing players, piece kinds or positions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid player: expected 'white' or 'black', got '{0}'")]
    InvalidPlayer(String),

    #[error("invalid piece kind: {0}")]
    InvalidPieceKind(String),

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
