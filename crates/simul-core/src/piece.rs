//! Piece representation.

use crate::{ParseError, Player};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// The six kinds of pieces.
///
/// The derived ordering `Pawn < Knight < Bishop < Rook < Queen < King` is the
/// priority used when two simultaneous moves collide. It is not a material
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in priority order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the one-letter signifier (`P`, `N`, `B`, `R`, `Q`, `K`).
    pub const fn signifier(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Returns the lowercase name used in designations.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Returns true if this kind slides (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PieceKind {
    type Err = ParseError;

    /// Accepts either the full name or the signifier, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "pawn" | "p" => PieceKind::Pawn,
            "knight" | "n" => PieceKind::Knight,
            "bishop" | "b" => PieceKind::Bishop,
            "rook" | "r" => PieceKind::Rook,
            "queen" | "q" => PieceKind::Queen,
            "king" | "k" => PieceKind::King,
            _ => return Err(ParseError::InvalidPieceKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// A piece with a stable identity.
///
/// Two pieces are equal exactly when their designations are equal. The
/// designation is fixed when the piece is created and never depends on where
/// the piece currently stands, so a piece can be tracked across snapshots and
/// a captured piece never aliases whatever later occupies its old square.
///
/// Cloning is cheap: the designation is shared.
#[derive(Clone)]
pub struct Piece {
    player: Player,
    kind: PieceKind,
    designation: Arc<str>,
}

impl Piece {
    /// Creates a piece with the given identity.
    pub fn new(player: Player, kind: PieceKind, designation: impl Into<Arc<str>>) -> Self {
        Piece {
            player,
            kind,
            designation: designation.into(),
        }
    }

    /// Returns the owning player.
    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the kind of this piece.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the unique designation.
    #[inline]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns true if this piece belongs to the other player.
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.player != other.player
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.designation == other.designation
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.designation.hash(state);
    }
}

impl PartialOrd for Piece {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Piece {
    fn cmp(&self, other: &Self) -> Ordering {
        self.designation.cmp(&other.designation)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.designation)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.designation)
    }
}
