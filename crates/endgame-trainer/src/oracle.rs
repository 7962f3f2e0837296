//! The board capabilities the generator relies on.

use chess_core::{Piece, Square};
use chess_rules::Board;

/// A board that can be filled piece by piece and judged by the chess rules.
///
/// The generator never inspects rules itself; anything implementing these
/// operations can stand in for a full rules engine.
pub trait PlacementOracle {
    /// Squares currently holding a piece.
    fn occupied_squares(&self) -> Vec<Square>;

    /// Puts `piece` on an empty `square`.
    fn place(&mut self, square: Square, piece: Piece);

    /// Clears `square`.
    fn remove(&mut self, square: Square);

    /// Whether the placement could occur in a real game.
    fn is_legal(&self) -> bool;

    /// Whether the game is already decided in this placement.
    fn is_game_over(&self) -> bool;

    /// Portable text encoding of the position (FEN).
    fn encode(&self) -> String;
}

impl PlacementOracle for Board {
    fn occupied_squares(&self) -> Vec<Square> {
        self.occupied().into_iter().collect()
    }

    fn place(&mut self, square: Square, piece: Piece) {
        self.set_piece_at(square, piece);
    }

    fn remove(&mut self, square: Square) {
        self.remove_piece_at(square);
    }

    fn is_legal(&self) -> bool {
        self.is_valid()
    }

    fn is_game_over(&self) -> bool {
        Board::is_game_over(self)
    }

    fn encode(&self) -> String {
        self.to_fen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_board_answers_through_the_trait() {
        let mut board = Board::default();
        let e1 = Square::from_algebraic("e1").unwrap();
        let e8 = Square::from_algebraic("e8").unwrap();

        board.place(e1, Piece::from_symbol('K').unwrap());
        assert!(!PlacementOracle::is_legal(&board));

        board.place(e8, Piece::from_symbol('k').unwrap());
        assert!(PlacementOracle::is_legal(&board));
        assert!(PlacementOracle::is_game_over(&board));
        assert_eq!(board.occupied_squares(), vec![e1, e8]);
        assert_eq!(board.encode(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");

        board.remove(e8);
        assert_eq!(board.occupied_squares(), vec![e1]);
    }
}
