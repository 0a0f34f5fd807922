//! Player representation.

use crate::ParseError;
use std::str::FromStr;

/// Represents the two players of a simultaneous game.
///
/// White's home row is row 0 and its pawns advance towards higher rows;
/// Black's home row is the last row and its pawns advance downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the other player.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row step of this player's pawns (+1 for White, -1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Returns the home row on a board with `height` rows.
    #[inline]
    pub const fn home_row(self, height: u8) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => height - 1,
        }
    }

    /// Returns the row in front of the home row, where pawns start.
    #[inline]
    pub const fn pawn_row(self, height: u8) -> u8 {
        match self {
            Player::White => 1,
            Player::Black => height - 2,
        }
    }

    /// Returns the lowercase name used in designations.
    pub const fn name(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Player::White),
            "black" | "b" => Ok(Player::Black),
            _ => Err(ParseError::InvalidPlayer(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_player() {
        assert_eq!(Player::White.opposite(), Player::Black);
        assert_eq!(Player::Black.opposite(), Player::White);
    }

    #[test]
    fn player_index() {
        assert_eq!(Player::White.index(), 0);
        assert_eq!(Player::Black.index(), 1);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Player::White.forward(), 1);
        assert_eq!(Player::Black.forward(), -1);
    }

    #[test]
    fn home_and_pawn_rows() {
        assert_eq!(Player::White.home_row(8), 0);
        assert_eq!(Player::Black.home_row(8), 7);
        assert_eq!(Player::White.pawn_row(8), 1);
        assert_eq!(Player::Black.pawn_row(8), 6);
        assert_eq!(Player::Black.home_row(5), 4);
    }

    #[test]
    fn parse_player() {
        assert_eq!("white".parse::<Player>(), Ok(Player::White));
        assert_eq!("B".parse::<Player>(), Ok(Player::Black));
        assert!("red".parse::<Player>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::White), "White");
        assert_eq!(format!("{}", Player::Black), "Black");
    }
}
