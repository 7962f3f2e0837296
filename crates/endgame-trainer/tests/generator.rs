//! Properties of generated positions against the real rules.

use chess_core::{Piece, Square};
use chess_rules::Board;
use endgame_trainer::{parse, PlacementOracle, PositionGenerator};
use proptest::prelude::*;

/// A rook or queen for White plus up to five more pieces of either color.
///
/// A major piece guarantees some arrangement is not a dead draw.
fn winnable_request() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!['Q', 'R']),
        prop::collection::vec(prop::sample::select("QRBNPqrbnp".chars().collect::<Vec<_>>()), 0..=5),
    )
        .prop_map(|(anchor, rest)| std::iter::once(anchor).chain(rest).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_positions_are_legal_and_playable(request in winnable_request(), seed in any::<u64>()) {
        let pieces = parse(&request).pieces;
        let board: Board = PositionGenerator::seeded(seed).generate(&pieces).unwrap();

        prop_assert!(board.is_valid(), "{}", board.to_fen());
        prop_assert!(!board.is_game_over(), "{}", board.to_fen());
    }

    #[test]
    fn every_requested_piece_gets_its_own_square(request in winnable_request(), seed in any::<u64>()) {
        let pieces = parse(&request).pieces;
        let board: Board = PositionGenerator::seeded(seed).generate(&pieces).unwrap();

        let occupied: Vec<Square> = board.occupied_squares();
        prop_assert_eq!(occupied.len(), pieces.len() + 2);

        let mut placed: Vec<char> = board.pieces().map(|(_, p)| p.symbol()).collect();
        let mut expected: Vec<char> = pieces.iter().map(|p| p.symbol()).chain(['K', 'k']).collect();
        placed.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(placed, expected);
    }
}

#[test]
fn queen_against_rook_end_to_end() {
    let pieces: Vec<Piece> = parse("Qr").pieces;
    let board: Board = PositionGenerator::seeded(2024).generate(&pieces).unwrap();

    let fen = board.encode();
    let placement = fen.split(' ').next().unwrap();
    let mut symbols: Vec<char> = placement.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    symbols.sort_unstable();
    assert_eq!(symbols, vec!['K', 'Q', 'k', 'r']);
    assert!(fen.ends_with(" w - - 0 1"));
}

#[test]
fn dead_drawn_material_cannot_be_placed() {
    for request in ["N", "B", "n", "b"] {
        let pieces = parse(request).pieces;
        let result: Result<Board, _> = PositionGenerator::seeded(5).generate(&pieces);
        assert!(result.is_err(), "{} should not be placeable", request);
    }
}
