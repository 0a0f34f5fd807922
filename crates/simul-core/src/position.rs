//! Board coordinates.

use crate::ParseError;
use std::fmt;
use std::str::FromStr;

/// A square on a board.
///
/// Rows and columns are 0-indexed. `board` selects one of several boards in
/// multi-board variants and is 0 everywhere else. Equality, hashing and
/// ordering are by `(board, row, column)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    board: u8,
    row: u8,
    column: u8,
}

impl Position {
    /// Creates a position on board 0.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        Position {
            board: 0,
            row,
            column,
        }
    }

    /// Creates a position on the given board.
    #[inline]
    pub const fn on_board(board: u8, row: u8, column: u8) -> Self {
        Position { board, row, column }
    }

    /// Returns the board index.
    #[inline]
    pub const fn board(self) -> u8 {
        self.board
    }

    /// Returns the row.
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column.
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the position shifted by `offset`, or `None` if a coordinate
    /// would become negative or overflow.
    ///
    /// Board dimensions are not checked here; see [`BoardDimensions::contains`].
    #[inline]
    pub const fn translate(self, offset: Offset) -> Option<Position> {
        let row = match self.row.checked_add_signed(offset.rows) {
            Some(r) => r,
            None => return None,
        };
        let column = match self.column.checked_add_signed(offset.columns) {
            Some(c) => c,
            None => return None,
        };
        Some(Position {
            board: self.board,
            row,
            column,
        })
    }

    /// Parses algebraic-style notation: `"c3"` for board 0, `"b1:c3"` for
    /// board 1. Columns are letters starting at `a`, rows start at `1`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (board, square) = match s.split_once(':') {
            Some((prefix, square)) => {
                let board = prefix.strip_prefix('b')?.parse::<u8>().ok()?;
                (board, square)
            }
            None => (0, s),
        };

        let mut chars = square.chars();
        let file = chars.next()?;
        if !file.is_ascii_lowercase() {
            return None;
        }
        let column = file as u8 - b'a';
        let row = chars.as_str().parse::<u8>().ok()?.checked_sub(1)?;
        Some(Position::on_board(board, row, column))
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s).ok_or_else(|| ParseError::InvalidPosition(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.board != 0 {
            write!(f, "b{}:", self.board)?;
        }
        if self.column < 26 {
            write!(f, "{}{}", (b'a' + self.column) as char, self.row as u16 + 1)
        } else {
            write!(f, "({},{})", self.row, self.column)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}

/// A relative step on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub rows: i8,
    pub columns: i8,
}

impl Offset {
    /// Creates an offset.
    #[inline]
    pub const fn new(rows: i8, columns: i8) -> Self {
        Offset { rows, columns }
    }
}

/// The extent of the playing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardDimensions {
    /// Number of columns.
    pub width: u8,
    /// Number of rows.
    pub height: u8,
    /// Number of boards (1 for single-board variants).
    pub boards: u8,
}

impl BoardDimensions {
    /// The regular 8x8 single board.
    pub const REGULAR: BoardDimensions = BoardDimensions::new(8, 8);

    /// Creates dimensions for a single board.
    #[inline]
    pub const fn new(width: u8, height: u8) -> Self {
        BoardDimensions {
            width,
            height,
            boards: 1,
        }
    }

    /// Returns true if `position` lies on the playing area.
    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        position.board < self.boards && position.row < self.height && position.column < self.width
    }

    /// Returns the longest distance a sliding piece could travel.
    #[inline]
    pub const fn max_extent(self) -> u8 {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Iterates over every square, board by board, row by row.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.boards).flat_map(move |board| {
            (0..self.height).flat_map(move |row| {
                (0..self.width).map(move |column| Position::on_board(board, row, column))
            })
        })
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self::REGULAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn position_accessors() {
        let p = Position::on_board(1, 3, 4);
        assert_eq!(p.board(), 1);
        assert_eq!(p.row(), 3);
        assert_eq!(p.column(), 4);
    }

    #[test]
    fn translate_rejects_negative_coordinates() {
        let p = Position::new(0, 2);
        assert_eq!(p.translate(Offset::new(1, -1)), Some(Position::new(1, 1)));
        assert_eq!(p.translate(Offset::new(-1, 0)), None);
        assert_eq!(p.translate(Offset::new(0, -3)), None);
    }

    #[test]
    fn contains_checks_every_axis() {
        let dims = BoardDimensions::REGULAR;
        assert!(dims.contains(Position::new(7, 7)));
        assert!(!dims.contains(Position::new(8, 0)));
        assert!(!dims.contains(Position::new(0, 8)));
        assert!(!dims.contains(Position::on_board(1, 0, 0)));
    }

    #[test]
    fn positions_covers_the_board() {
        let dims = BoardDimensions::new(3, 2);
        let all: Vec<_> = dims.positions().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[5], Position::new(1, 2));
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_algebraic("e4"), Some(Position::new(3, 4)));
        assert_eq!(
            Position::from_algebraic("b2:c3"),
            Some(Position::on_board(2, 2, 2))
        );
        assert_eq!(Position::from_algebraic("a0"), None);
        assert_eq!(Position::from_algebraic("A1"), None);
        assert_eq!(Position::from_algebraic(""), None);
        assert!("zz".parse::<Position>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(3, 4).to_string(), "e4");
        assert_eq!(Position::on_board(1, 0, 0).to_string(), "b1:a1");
        assert_eq!(format!("{:?}", Position::new(7, 7)), "Position(h8)");
    }

    proptest! {
        #[test]
        fn translate_is_reversible(
            row in 0u8..16,
            column in 0u8..16,
            dr in -8i8..8,
            dc in -8i8..8,
        ) {
            let start = Position::new(row, column);
            if let Some(moved) = start.translate(Offset::new(dr, dc)) {
                prop_assert_eq!(moved.translate(Offset::new(-dr, -dc)), Some(start));
            } else {
                prop_assert!(row as i16 + (dr as i16) < 0 || column as i16 + (dc as i16) < 0);
            }
        }
    }
}
