//! The regular 8x8 two-player layout.

use super::RuleSet;
use simul_core::{BoardDimensions, Piece, PieceKind, Player, Position};

/// Column-by-column pairing of each back-row piece with the royal it serves.
///
/// Entry `i` is `(liege, kind)` for column `i`. Designations are derived from
/// it, so the two bishops, knights and rooks stay distinguishable.
pub const FEALTY: [(PieceKind, PieceKind); 8] = [
    (PieceKind::Queen, PieceKind::Rook),
    (PieceKind::Queen, PieceKind::Knight),
    (PieceKind::Queen, PieceKind::Bishop),
    (PieceKind::Queen, PieceKind::Queen),
    (PieceKind::King, PieceKind::King),
    (PieceKind::King, PieceKind::Bishop),
    (PieceKind::King, PieceKind::Knight),
    (PieceKind::King, PieceKind::Rook),
];

/// Regular simultaneous chess on a single 8x8 board.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularRules;

impl RuleSet for RegularRules {
    fn dimensions(&self) -> BoardDimensions {
        BoardDimensions::REGULAR
    }

    fn initial_pieces(&self) -> Vec<(Piece, Position)> {
        regular_initial_pieces(BoardDimensions::REGULAR.height)
    }
}

/// Builds the fealty layout for both players on a board `height` rows tall.
///
/// Back-row pieces are designated `"<player>-<liege>-<kind>"`; the pawn in
/// front of each carries the same designation with a `-pawn` suffix.
pub fn regular_initial_pieces(height: u8) -> Vec<(Piece, Position)> {
    let mut pieces = Vec::with_capacity(FEALTY.len() * 4);
    for player in Player::ALL {
        for (column, (liege, kind)) in FEALTY.iter().enumerate() {
            let column = column as u8;
            let designation = format!("{}-{}-{}", player.name(), liege.name(), kind.name());

            pieces.push((
                Piece::new(player, PieceKind::Pawn, format!("{}-pawn", designation)),
                Position::new(player.pawn_row(height), column),
            ));
            pieces.push((
                Piece::new(player, *kind, designation),
                Position::new(player.home_row(height), column),
            ));
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn thirty_two_unique_pieces() {
        let pieces = RegularRules.initial_pieces();
        assert_eq!(pieces.len(), 32);

        let designations: HashSet<_> = pieces.iter().map(|(p, _)| p.designation()).collect();
        assert_eq!(designations.len(), 32);

        let squares: HashSet<_> = pieces.iter().map(|(_, s)| *s).collect();
        assert_eq!(squares.len(), 32);
    }

    #[test]
    fn mirrored_home_rows() {
        let state = RegularRules.initial_state().unwrap();
        for column in 0..8 {
            let white = state.piece_at(Position::new(0, column)).unwrap();
            let black = state.piece_at(Position::new(7, column)).unwrap();
            assert_eq!(white.kind(), black.kind());
            assert_eq!(white.player(), Player::White);
            assert_eq!(black.player(), Player::Black);

            let white_pawn = state.piece_at(Position::new(1, column)).unwrap();
            let black_pawn = state.piece_at(Position::new(6, column)).unwrap();
            assert_eq!(white_pawn.kind(), PieceKind::Pawn);
            assert_eq!(black_pawn.kind(), PieceKind::Pawn);
        }
        assert_eq!(
            state.piece_at(Position::new(0, 3)).unwrap().kind(),
            PieceKind::Queen
        );
        assert_eq!(
            state.piece_at(Position::new(7, 4)).unwrap().kind(),
            PieceKind::King
        );
    }

    #[test]
    fn designations_follow_fealty() {
        let state = RegularRules.initial_state().unwrap();
        assert_eq!(
            state.piece_at(Position::new(0, 1)).unwrap().designation(),
            "white-queen-knight"
        );
        assert_eq!(
            state.piece_at(Position::new(6, 6)).unwrap().designation(),
            "black-king-knight-pawn"
        );
    }
}
