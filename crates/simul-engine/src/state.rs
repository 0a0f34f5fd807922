//! Immutable board snapshots.

use simul_core::{BoardDimensions, Move, Piece, PieceKind, Player, Position};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors that can occur when building a [`GameState`] from a placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{piece} is placed outside the board at {position}")]
    OutOfBounds { piece: String, position: Position },

    #[error("{position} holds both {first} and {second}")]
    SquareTaken {
        position: Position,
        first: String,
        second: String,
    },

    #[error("{0} is placed twice")]
    DuplicatePiece(String),

    #[error("{0} is listed as captured but still on the board")]
    CapturedOnBoard(String),
}

/// A snapshot of the board between turns.
///
/// Holds the placement of every live piece in both directions, the pieces
/// captured so far (in capture order) and the set of pieces that have made a
/// move at some point in the game.
///
/// Snapshots are never mutated. They are built from a full placement with
/// [`GameState::new`] or [`GameState::from_parts`], and every later snapshot
/// is derived with [`GameState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    dimensions: BoardDimensions,
    piece_to_position: BTreeMap<Piece, Position>,
    position_to_piece: BTreeMap<Position, Piece>,
    captured: Vec<Piece>,
    moved: BTreeSet<Piece>,
}

impl GameState {
    /// Creates a snapshot with the given pieces on their starting squares.
    pub fn new(
        dimensions: BoardDimensions,
        placement: impl IntoIterator<Item = (Piece, Position)>,
    ) -> Result<Self, StateError> {
        Self::from_parts(dimensions, placement, Vec::new(), Vec::new())
    }

    /// Creates a snapshot with an explicit capture list and set of pieces that
    /// have already moved.
    pub fn from_parts(
        dimensions: BoardDimensions,
        placement: impl IntoIterator<Item = (Piece, Position)>,
        captured: impl IntoIterator<Item = Piece>,
        moved: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, StateError> {
        let mut piece_to_position = BTreeMap::new();
        let mut position_to_piece: BTreeMap<Position, Piece> = BTreeMap::new();

        for (piece, position) in placement {
            if !dimensions.contains(position) {
                return Err(StateError::OutOfBounds {
                    piece: piece.to_string(),
                    position,
                });
            }
            if let Some(first) = position_to_piece.get(&position) {
                return Err(StateError::SquareTaken {
                    position,
                    first: first.to_string(),
                    second: piece.to_string(),
                });
            }
            if piece_to_position.contains_key(&piece) {
                return Err(StateError::DuplicatePiece(piece.to_string()));
            }
            position_to_piece.insert(position, piece.clone());
            piece_to_position.insert(piece, position);
        }

        let captured: Vec<Piece> = captured.into_iter().collect();
        if let Some(live) = captured.iter().find(|p| piece_to_position.contains_key(*p)) {
            return Err(StateError::CapturedOnBoard(live.to_string()));
        }

        Ok(GameState {
            dimensions,
            piece_to_position,
            position_to_piece,
            captured,
            moved: moved.into_iter().collect(),
        })
    }

    /// Returns a new snapshot with `moves` committed as one batch.
    ///
    /// Every live mover is first placed on its destination, then every captured
    /// piece is taken off the board. A piece that is both a mover and a capture
    /// target in the same batch therefore ends up captured.
    ///
    /// The moves are expected to be non-conflicting: no two movers may end on
    /// the same square unless one of them is captured in the same batch.
    pub fn apply(&self, moves: &[Move]) -> GameState {
        let mut piece_to_position = self.piece_to_position.clone();
        let mut captured = self.captured.clone();
        let mut moved = self.moved.clone();

        for m in moves {
            if let Some(position) = piece_to_position.get_mut(m.piece()) {
                *position = m.to();
                moved.insert(m.piece().clone());
            }
        }

        for captive in moves.iter().filter_map(Move::captured) {
            if piece_to_position.remove(captive).is_some() {
                captured.push(captive.clone());
            }
        }

        let position_to_piece: BTreeMap<Position, Piece> = piece_to_position
            .iter()
            .map(|(piece, position)| (*position, piece.clone()))
            .collect();
        debug_assert_eq!(
            position_to_piece.len(),
            piece_to_position.len(),
            "two live pieces share a square after applying {:?}",
            moves
        );

        GameState {
            dimensions: self.dimensions,
            piece_to_position,
            position_to_piece,
            captured,
            moved,
        }
    }

    /// Returns the board dimensions.
    #[inline]
    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Returns where `piece` stands, or `None` if it is captured or unknown.
    #[inline]
    pub fn position_of(&self, piece: &Piece) -> Option<Position> {
        self.piece_to_position.get(piece).copied()
    }

    /// Returns the piece on `position`, if any.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.position_to_piece.get(&position)
    }

    /// Returns the live piece with the same designation as `piece`.
    ///
    /// The returned piece carries the player and kind it was placed with.
    #[inline]
    pub fn live_piece(&self, piece: &Piece) -> Option<&Piece> {
        self.piece_to_position.get_key_value(piece).map(|(p, _)| p)
    }

    /// Returns true if `piece` is still on the board.
    #[inline]
    pub fn is_live(&self, piece: &Piece) -> bool {
        self.piece_to_position.contains_key(piece)
    }

    /// Returns true if `piece` has been moved at least once.
    #[inline]
    pub fn has_moved(&self, piece: &Piece) -> bool {
        self.moved.contains(piece)
    }

    /// Iterates over live pieces and their squares, ordered by designation.
    pub fn pieces(&self) -> impl Iterator<Item = (&Piece, Position)> {
        self.piece_to_position.iter().map(|(p, pos)| (p, *pos))
    }

    /// Iterates over the live pieces of one player.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (&Piece, Position)> {
        self.pieces().filter(move |(p, _)| p.player() == player)
    }

    /// Returns the number of live pieces.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.piece_to_position.len()
    }

    /// Returns the captured pieces in capture order.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Returns the king of `player` and its square, if it is still live.
    pub fn king_of(&self, player: Player) -> Option<(&Piece, Position)> {
        self.pieces_of(player).find(|(p, _)| p.kind() == PieceKind::King)
    }

    /// Returns true if both placement maps are exact inverses of each other.
    pub fn is_consistent(&self) -> bool {
        self.piece_to_position.len() == self.position_to_piece.len()
            && self
                .piece_to_position
                .iter()
                .all(|(piece, position)| self.position_to_piece.get(position) == Some(piece))
            && self
                .captured
                .iter()
                .all(|p| !self.piece_to_position.contains_key(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(player: Player, kind: PieceKind, name: &str) -> Piece {
        Piece::new(player, kind, name)
    }

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_builds_both_maps() {
        let rook = piece(Player::White, PieceKind::Rook, "wr");
        let king = piece(Player::Black, PieceKind::King, "bk");
        let state = GameState::new(
            BoardDimensions::REGULAR,
            [(rook.clone(), sq("a1")), (king.clone(), sq("e8"))],
        )
        .unwrap();

        assert_eq!(state.position_of(&rook), Some(sq("a1")));
        assert_eq!(state.piece_at(sq("e8")), Some(&king));
        assert_eq!(state.piece_at(sq("e4")), None);
        assert_eq!(state.live_count(), 2);
        assert!(state.captured().is_empty());
        assert!(state.is_consistent());
    }

    #[test]
    fn rejects_invalid_placements() {
        let a = piece(Player::White, PieceKind::Rook, "a");
        let b = piece(Player::Black, PieceKind::Rook, "b");

        let off_board =
            GameState::new(BoardDimensions::REGULAR, [(a.clone(), Position::new(8, 0))]);
        assert!(matches!(off_board, Err(StateError::OutOfBounds { .. })));

        let shared = GameState::new(
            BoardDimensions::REGULAR,
            [(a.clone(), sq("a1")), (b.clone(), sq("a1"))],
        );
        assert!(matches!(shared, Err(StateError::SquareTaken { .. })));

        let twice = GameState::new(
            BoardDimensions::REGULAR,
            [(a.clone(), sq("a1")), (a.clone(), sq("a2"))],
        );
        assert_eq!(twice, Err(StateError::DuplicatePiece("a".to_string())));

        let captured_live = GameState::from_parts(
            BoardDimensions::REGULAR,
            [(a.clone(), sq("a1"))],
            [a],
            [],
        );
        assert!(matches!(captured_live, Err(StateError::CapturedOnBoard(_))));
    }

    #[test]
    fn apply_moves_and_captures() {
        let rook = piece(Player::White, PieceKind::Rook, "wr");
        let knight = piece(Player::Black, PieceKind::Knight, "bn");
        let state = GameState::new(
            BoardDimensions::REGULAR,
            [(rook.clone(), sq("a1")), (knight.clone(), sq("a5"))],
        )
        .unwrap();

        let next = state.apply(&[Move::capture(rook.clone(), sq("a5"), knight.clone())]);

        assert_eq!(next.position_of(&rook), Some(sq("a5")));
        assert!(!next.is_live(&knight));
        assert_eq!(next.captured(), &[knight]);
        assert!(next.has_moved(&rook));
        assert!(next.is_consistent());

        // The source snapshot is untouched.
        assert_eq!(state.position_of(&rook), Some(sq("a1")));
        assert!(!state.has_moved(&rook));
    }

    #[test]
    fn mover_that_is_also_captured_ends_up_captured() {
        let queen = piece(Player::White, PieceKind::Queen, "wq");
        let knight = piece(Player::Black, PieceKind::Knight, "bn");
        let state = GameState::new(
            BoardDimensions::REGULAR,
            [(queen.clone(), sq("d1")), (knight.clone(), sq("c3"))],
        )
        .unwrap();

        let next = state.apply(&[
            Move::capture(queen.clone(), sq("c3"), knight.clone()),
            Move::capture(knight.clone(), sq("d1"), queen.clone()),
        ]);

        assert_eq!(next.live_count(), 0);
        assert_eq!(next.piece_at(sq("c3")), None);
        assert_eq!(next.piece_at(sq("d1")), None);
        assert_eq!(next.captured().len(), 2);
        assert!(next.is_consistent());
    }

    #[test]
    fn king_lookup() {
        let king = piece(Player::White, PieceKind::King, "wk");
        let state =
            GameState::new(BoardDimensions::REGULAR, [(king.clone(), sq("e1"))]).unwrap();
        assert_eq!(state.king_of(Player::White), Some((&king, sq("e1"))));
        assert_eq!(state.king_of(Player::Black), None);
    }
}
