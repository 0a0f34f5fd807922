//! Move representation.

use crate::{Piece, Player, Position};
use std::fmt;

/// A move of one piece to a destination square.
///
/// `captured` is the piece standing on the destination when the move was
/// generated, or the piece a move was converted into capturing when two
/// simultaneous moves collided. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    to: Position,
    captured: Option<Piece>,
}

impl Move {
    /// Creates a move.
    #[inline]
    pub fn new(piece: Piece, to: Position, captured: Option<Piece>) -> Self {
        Move {
            piece,
            to,
            captured,
        }
    }

    /// Creates a move onto an empty square.
    #[inline]
    pub fn quiet(piece: Piece, to: Position) -> Self {
        Self::new(piece, to, None)
    }

    /// Creates a capturing move.
    #[inline]
    pub fn capture(piece: Piece, to: Position, captured: Piece) -> Self {
        Self::new(piece, to, Some(captured))
    }

    /// Returns the moving piece.
    #[inline]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Returns the player making the move.
    #[inline]
    pub fn player(&self) -> Player {
        self.piece.player()
    }

    /// Returns the destination square.
    #[inline]
    pub fn to(&self) -> Position {
        self.to
    }

    /// Returns the captured piece, if any.
    #[inline]
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }

    /// Returns true if this move captures something.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move captures `piece`.
    #[inline]
    pub fn captures(&self, piece: &Piece) -> bool {
        self.captured.as_ref() == Some(piece)
    }

    /// Returns the same move re-targeted as a capture of `captured`.
    pub fn as_capture_of(&self, captured: Piece) -> Move {
        Move::capture(self.piece.clone(), self.to, captured)
    }

    /// Returns the same move with any capture dropped.
    pub fn without_capture(&self) -> Move {
        Move::quiet(self.piece.clone(), self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.captured {
            Some(captured) => write!(f, "{} x{} ({})", self.piece, self.to, captured),
            None => write!(f, "{} {}", self.piece, self.to),
        }
    }
}
