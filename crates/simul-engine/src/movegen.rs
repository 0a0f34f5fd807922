//! Pseudo-legal move generation.
//!
//! Each piece kind maps to a [`MoveStrategy`]: sliders walk along direction
//! vectors until blocked, steppers try a fixed set of single offsets, and
//! pawns follow their own asymmetric rule. None of this looks at check; see
//! [`crate::legality`] for that.

use crate::rules::RuleSet;
use crate::GameState;
use simul_core::{Move, Offset, Piece, PieceKind, Player, Position};
use std::collections::{BTreeMap, BTreeSet};

/// The four orthogonal directions.
pub const ORTHOGONAL: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(0, -1),
];

/// The four diagonal directions.
pub const DIAGONAL: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

/// All eight neighbouring directions.
pub const ADJACENT: [Offset; 8] = [
    Offset::new(1, 0),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(0, -1),
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

/// The eight knight jumps.
pub const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(1, 2),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-2, 1),
    Offset::new(-1, 2),
    Offset::new(-2, -1),
    Offset::new(-1, -2),
];

/// How a piece kind produces candidate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Walk each direction until the board edge or the first occupied square.
    Slide(&'static [Offset]),
    /// Try each offset once; no blocking in between.
    Step(&'static [Offset]),
    /// Forward pushes onto empty squares, diagonal forward captures only.
    Pawn,
}

impl MoveStrategy {
    /// Returns the standard strategy for `kind`.
    pub const fn standard(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => MoveStrategy::Pawn,
            PieceKind::Knight => MoveStrategy::Step(&KNIGHT_JUMPS),
            PieceKind::Bishop => MoveStrategy::Slide(&DIAGONAL),
            PieceKind::Rook => MoveStrategy::Slide(&ORTHOGONAL),
            PieceKind::Queen => MoveStrategy::Slide(&ADJACENT),
            PieceKind::King => MoveStrategy::Step(&ADJACENT),
        }
    }
}

/// What a piece would find on a destination square.
enum Target<'a> {
    Empty,
    Enemy(&'a Piece),
    Blocked,
}

fn target<'a>(piece: &Piece, to: Option<Position>, state: &'a GameState) -> Target<'a> {
    let to = match to {
        Some(to) if state.dimensions().contains(to) => to,
        _ => return Target::Blocked,
    };
    match state.piece_at(to) {
        None => Target::Empty,
        Some(occupant) if occupant.is_enemy_of(piece) => Target::Enemy(occupant),
        Some(_) => Target::Blocked,
    }
}

/// Generates pseudo-legal moves for `piece` with the given strategy.
///
/// Returns an empty list if the piece is captured or not part of the game.
/// Moves always carry the live piece from `state`, whatever player or kind
/// the `piece` argument claims.
pub fn generate(strategy: MoveStrategy, piece: &Piece, state: &GameState) -> Vec<Move> {
    let (Some(piece), Some(from)) = (state.live_piece(piece), state.position_of(piece)) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match strategy {
        MoveStrategy::Slide(directions) => slide(piece, from, directions, state, &mut moves),
        MoveStrategy::Step(offsets) => step(piece, from, offsets, state, &mut moves),
        MoveStrategy::Pawn => pawn(piece, from, state, &mut moves),
    }
    moves
}

fn slide(
    piece: &Piece,
    from: Position,
    directions: &[Offset],
    state: &GameState,
    moves: &mut Vec<Move>,
) {
    let reach = state.dimensions().max_extent();
    for &direction in directions {
        let mut current = from;
        for _ in 0..reach {
            let next = current.translate(direction);
            match target(piece, next, state) {
                Target::Empty => {
                    // Empty implies the square exists.
                    let Some(to) = next else { break };
                    moves.push(Move::quiet(piece.clone(), to));
                    current = to;
                }
                Target::Enemy(occupant) => {
                    if let Some(to) = next {
                        moves.push(Move::capture(piece.clone(), to, occupant.clone()));
                    }
                    break;
                }
                Target::Blocked => break,
            }
        }
    }
}

fn step(
    piece: &Piece,
    from: Position,
    offsets: &[Offset],
    state: &GameState,
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        let to = from.translate(offset);
        match (target(piece, to, state), to) {
            (Target::Empty, Some(to)) => moves.push(Move::quiet(piece.clone(), to)),
            (Target::Enemy(occupant), Some(to)) => {
                moves.push(Move::capture(piece.clone(), to, occupant.clone()))
            }
            _ => {}
        }
    }
}

fn pawn(piece: &Piece, from: Position, state: &GameState, moves: &mut Vec<Move>) {
    let forward = piece.player().forward();
    let ahead = Offset::new(forward, 0);

    let one = from.translate(ahead);
    if let (Target::Empty, Some(one)) = (target(piece, one, state), one) {
        moves.push(Move::quiet(piece.clone(), one));

        if !state.has_moved(piece) {
            let two = one.translate(ahead);
            if let (Target::Empty, Some(two)) = (target(piece, two, state), two) {
                moves.push(Move::quiet(piece.clone(), two));
            }
        }
    }

    for side in [1, -1] {
        let to = from.translate(Offset::new(forward, side));
        if let (Target::Enemy(occupant), Some(to)) = (target(piece, to, state), to) {
            moves.push(Move::capture(piece.clone(), to, occupant.clone()));
        }
    }
}

/// Every candidate move of a set of pieces, plus the reverse index from
/// destination square to the pieces that can reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMatrix {
    available: BTreeMap<Piece, Vec<Move>>,
    threatened: BTreeMap<Position, BTreeSet<Piece>>,
}

impl MoveMatrix {
    /// Builds the matrix for every live piece of both players.
    pub fn generate<R: RuleSet + ?Sized>(rules: &R, state: &GameState) -> Self {
        Self::build(rules, state, |_| true)
    }

    /// Builds the matrix for the live pieces of one player.
    pub fn for_player<R: RuleSet + ?Sized>(rules: &R, state: &GameState, player: Player) -> Self {
        Self::build(rules, state, |piece| piece.player() == player)
    }

    fn build<R, F>(rules: &R, state: &GameState, include: F) -> Self
    where
        R: RuleSet + ?Sized,
        F: Fn(&Piece) -> bool,
    {
        let mut matrix = MoveMatrix::default();
        for (piece, _) in state.pieces().filter(|(p, _)| include(p)) {
            let moves = rules.possible_moves(piece, state);
            for m in &moves {
                matrix
                    .threatened
                    .entry(m.to())
                    .or_default()
                    .insert(piece.clone());
            }
            matrix.available.insert(piece.clone(), moves);
        }
        matrix
    }

    /// Returns the candidate moves of `piece` (empty if it is not included).
    pub fn moves_for(&self, piece: &Piece) -> &[Move] {
        self.available.get(piece).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over every candidate move, grouped by piece.
    pub fn all_moves(&self) -> impl Iterator<Item = &Move> {
        self.available.values().flatten()
    }

    /// Iterates over the pieces that can move to `position`.
    pub fn threats_to(&self, position: Position) -> impl Iterator<Item = &Piece> {
        self.threatened.get(&position).into_iter().flatten()
    }

    /// Returns true if any included piece can move to `position`.
    pub fn is_threatened(&self, position: Position) -> bool {
        self.threatened.contains_key(&position)
    }

    /// Returns the number of candidate moves.
    pub fn len(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }

    /// Returns true if there are no candidate moves at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RegularRules, RuleSet};
    use simul_core::BoardDimensions;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn destinations(moves: &[Move]) -> BTreeSet<Position> {
        moves.iter().map(Move::to).collect()
    }

    fn board(pieces: &[(&Piece, &str)]) -> GameState {
        GameState::new(
            BoardDimensions::REGULAR,
            pieces.iter().map(|(p, s)| ((*p).clone(), sq(s))),
        )
        .unwrap()
    }

    #[test]
    fn rook_on_empty_board() {
        let rook = Piece::new(Player::White, PieceKind::Rook, "wr");
        let state = board(&[(&rook, "d4")]);
        let moves = generate(MoveStrategy::standard(PieceKind::Rook), &rook, &state);

        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn rook_stops_at_enemy_with_capture() {
        let rook = Piece::new(Player::White, PieceKind::Rook, "wr");
        let pawn = Piece::new(Player::Black, PieceKind::Pawn, "bp");
        let state = GameState::new(
            BoardDimensions::REGULAR,
            [
                (rook.clone(), Position::new(3, 3)),
                (pawn.clone(), Position::new(3, 6)),
            ],
        )
        .unwrap();
        let moves = generate(MoveStrategy::standard(PieceKind::Rook), &rook, &state);
        let dests = destinations(&moves);

        assert_eq!(moves.len(), 13);
        assert!(dests.contains(&Position::new(3, 6)));
        assert!(!dests.contains(&Position::new(3, 7)));
        let capture = moves.iter().find(|m| m.to() == Position::new(3, 6)).unwrap();
        assert_eq!(capture.captured(), Some(&pawn));
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);
    }

    #[test]
    fn friendly_piece_blocks_without_move() {
        let rook = Piece::new(Player::White, PieceKind::Rook, "wr");
        let pawn = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let state = board(&[(&rook, "a1"), (&pawn, "a3")]);
        let moves = generate(MoveStrategy::standard(PieceKind::Rook), &rook, &state);
        let dests = destinations(&moves);

        assert!(dests.contains(&sq("a2")));
        assert!(!dests.contains(&sq("a3")));
        assert!(!dests.contains(&sq("a4")));
        assert_eq!(moves.len(), 1 + 7);
    }

    #[test]
    fn bishop_and_queen_counts() {
        let bishop = Piece::new(Player::White, PieceKind::Bishop, "wb");
        let queen = Piece::new(Player::White, PieceKind::Queen, "wq");

        let state = board(&[(&bishop, "d4")]);
        assert_eq!(
            generate(MoveStrategy::standard(PieceKind::Bishop), &bishop, &state).len(),
            13
        );

        let state = board(&[(&queen, "d4")]);
        assert_eq!(
            generate(MoveStrategy::standard(PieceKind::Queen), &queen, &state).len(),
            27
        );
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let knight = Piece::new(Player::White, PieceKind::Knight, "wn");
        let own = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let enemy = Piece::new(Player::Black, PieceKind::Pawn, "bp");
        let blocker = Piece::new(Player::White, PieceKind::Pawn, "wp2");
        let state = board(&[
            (&knight, "b1"),
            (&own, "d2"),
            (&enemy, "c3"),
            (&blocker, "b2"),
        ]);
        let moves = generate(MoveStrategy::standard(PieceKind::Knight), &knight, &state);
        let dests = destinations(&moves);

        assert_eq!(dests, [sq("a3"), sq("c3")].into_iter().collect());
        let capture = moves.iter().find(|m| m.to() == sq("c3")).unwrap();
        assert_eq!(capture.captured(), Some(&enemy));
    }

    #[test]
    fn king_in_corner() {
        let king = Piece::new(Player::Black, PieceKind::King, "bk");
        let state = board(&[(&king, "h8")]);
        let moves = generate(MoveStrategy::standard(PieceKind::King), &king, &state);
        assert_eq!(
            destinations(&moves),
            [sq("g8"), sq("g7"), sq("h7")].into_iter().collect()
        );
    }

    #[test]
    fn pawn_double_step_from_start() {
        let pawn = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let state = board(&[(&pawn, "e2")]);
        let moves = generate(MoveStrategy::Pawn, &pawn, &state);
        assert_eq!(destinations(&moves), [sq("e3"), sq("e4")].into_iter().collect());
    }

    #[test]
    fn pawn_double_step_blocked() {
        let pawn = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let near = Piece::new(Player::Black, PieceKind::Knight, "bn");
        let state = board(&[(&pawn, "e2"), (&near, "e3")]);
        assert!(generate(MoveStrategy::Pawn, &pawn, &state).is_empty());

        let state = board(&[(&pawn, "e2"), (&near, "e4")]);
        let moves = generate(MoveStrategy::Pawn, &pawn, &state);
        assert_eq!(destinations(&moves), [sq("e3")].into_iter().collect());
    }

    #[test]
    fn moved_pawn_single_steps_only() {
        let pawn = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let state = GameState::from_parts(
            BoardDimensions::REGULAR,
            [(pawn.clone(), sq("e2"))],
            [],
            [pawn.clone()],
        )
        .unwrap();
        let moves = generate(MoveStrategy::Pawn, &pawn, &state);
        assert_eq!(destinations(&moves), [sq("e3")].into_iter().collect());
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_enemies() {
        let pawn = Piece::new(Player::Black, PieceKind::Pawn, "bp");
        let enemy = Piece::new(Player::White, PieceKind::Bishop, "wb");
        let friend = Piece::new(Player::Black, PieceKind::Knight, "bn");
        let state = board(&[(&pawn, "d7"), (&enemy, "c6"), (&friend, "e6")]);
        let moves = generate(MoveStrategy::Pawn, &pawn, &state);

        assert_eq!(
            destinations(&moves),
            [sq("d6"), sq("d5"), sq("c6")].into_iter().collect()
        );
        let capture = moves.iter().find(|m| m.is_capture()).unwrap();
        assert_eq!(capture.captured(), Some(&enemy));
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let pawn = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let state = board(&[(&pawn, "a8")]);
        assert!(generate(MoveStrategy::Pawn, &pawn, &state).is_empty());
    }

    #[test]
    fn captured_piece_has_no_moves() {
        let rook = Piece::new(Player::White, PieceKind::Rook, "wr");
        let state = GameState::new(BoardDimensions::REGULAR, []).unwrap();
        assert!(generate(MoveStrategy::standard(PieceKind::Rook), &rook, &state).is_empty());
    }

    #[test]
    fn matrix_indexes_threatened_squares() {
        let rook = Piece::new(Player::White, PieceKind::Rook, "wr");
        let knight = Piece::new(Player::White, PieceKind::Knight, "wn");
        let enemy = Piece::new(Player::Black, PieceKind::King, "bk");
        let state = board(&[(&rook, "a1"), (&knight, "b1"), (&enemy, "h8")]);

        let white = MoveMatrix::for_player(&RegularRules, &state, Player::White);
        assert!(white.moves_for(&enemy).is_empty());
        let at_a3: Vec<_> = white.threats_to(sq("a3")).collect();
        assert_eq!(at_a3, vec![&knight, &rook]);
        assert!(!white.is_threatened(sq("h8")));

        let both = MoveMatrix::generate(&RegularRules, &state);
        assert_eq!(both.moves_for(&enemy).len(), 3);
        assert_eq!(both.len(), white.len() + 3);
        assert_eq!(both.all_moves().count(), both.len());
        assert!(both
            .all_moves()
            .any(|m| m.piece() == &enemy && m.to() == sq("g7")));
    }

    #[test]
    fn moves_carry_the_piece_as_placed() {
        let rook = Piece::new(Player::White, PieceKind::Rook, "wr");
        let pawn = Piece::new(Player::White, PieceKind::Pawn, "wp");
        let state = board(&[(&rook, "a1"), (&pawn, "a2")]);

        // Same designation, wrong player and kind.
        let claimed = Piece::new(Player::Black, PieceKind::Queen, "wr");
        let moves = RegularRules.possible_moves(&claimed, &state);

        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.player() == Player::White));
        assert!(moves.iter().all(|m| m.piece().kind() == PieceKind::Rook));
        assert!(moves.iter().all(|m| !m.captures(&pawn)));
    }
}
