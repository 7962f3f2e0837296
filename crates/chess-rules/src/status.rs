//! Position legality.
//!
//! A board is valid when it could be reached in a real game as far as can be
//! told from the placement alone: one king each, sane material counts, no
//! pawns on the back ranks, and a check state the last move could have
//! produced.

use chess_core::{Color, PieceKind, Square};
use thiserror::Error;

use crate::attacks::{attacks_of, line_through};
use crate::{Bitboard, Board};

/// The first problem found with a board, in checking order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("the board is empty")]
    Empty,

    #[error("{0} has no king")]
    MissingKing(Color),

    #[error("{0} has more than one king")]
    TooManyKings(Color),

    #[error("{0} has more than 16 pieces")]
    TooManyPieces(Color),

    #[error("{0} has more than 8 pawns")]
    TooManyPawns(Color),

    #[error("pawn on the first or eighth rank")]
    PawnsOnBackRank,

    #[error("the side not to move is in check")]
    OppositeCheck,

    #[error("more than two pieces give check")]
    TooManyCheckers,

    #[error("check that no previous move could have given")]
    ImpossibleCheck,
}

/// Pieces of `by` attacking `sq`.
pub fn attackers_of(board: &Board, sq: Square, by: Color) -> Bitboard {
    let occupied = board.occupied();
    let mut attackers = Bitboard::EMPTY;
    for kind in PieceKind::ALL {
        // A piece on `sq` attacks `from` exactly when a piece of the same
        // kind on `from` attacks `sq`; pawns are the exception and flip color.
        let reach = match kind {
            PieceKind::Pawn => attacks_of(kind, by.opposite(), sq, occupied),
            _ => attacks_of(kind, by, sq, occupied),
        };
        attackers |= reach & board.pieces_of(kind, by);
    }
    attackers
}

/// Returns true if any piece of `by` attacks `sq`.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attackers_of(board, sq, by).is_not_empty()
}

/// Pieces giving check to the king of `color`.
pub fn checkers(board: &Board, color: Color) -> Bitboard {
    match board.king_of(color) {
        Some(king) => attackers_of(board, king, color.opposite()),
        None => Bitboard::EMPTY,
    }
}

impl Board {
    /// Checks the board against the legality rules.
    pub fn status(&self) -> Result<(), PositionError> {
        if self.occupied().is_empty() {
            return Err(PositionError::Empty);
        }

        for color in Color::ALL {
            match self.pieces_of(PieceKind::King, color).count() {
                0 => return Err(PositionError::MissingKing(color)),
                1 => {}
                _ => return Err(PositionError::TooManyKings(color)),
            }
        }

        for color in Color::ALL {
            if self.by_color(color).count() > 16 {
                return Err(PositionError::TooManyPieces(color));
            }
            if self.pieces_of(PieceKind::Pawn, color).count() > 8 {
                return Err(PositionError::TooManyPawns(color));
            }
        }

        if (self.by_kind(PieceKind::Pawn) & Bitboard::BACK_RANKS).is_not_empty() {
            return Err(PositionError::PawnsOnBackRank);
        }

        let us = self.turn();
        if checkers(self, us.opposite()).is_not_empty() {
            return Err(PositionError::OppositeCheck);
        }

        let checking = checkers(self, us);
        match checking.count() {
            0 | 1 => {}
            2 => {
                // Two checkers on one line through the king cannot both have
                // been uncovered by a single move.
                if let (Some(a), Some(b), Some(king)) =
                    (checking.first(), checking.last(), self.king_of(us))
                {
                    if line_through(a, b).contains(king) {
                        return Err(PositionError::ImpossibleCheck);
                    }
                }
            }
            _ => return Err(PositionError::TooManyCheckers),
        }

        Ok(())
    }

    /// Returns true if the board passes every legality rule.
    pub fn is_valid(&self) -> bool {
        self.status().is_ok()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        checkers(self, self.turn()).is_not_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn two_kings_apart_are_valid() {
        assert_eq!(board("4k3/8/8/8/8/8/8/4K3 w - - 0 1").status(), Ok(()));
    }

    #[test]
    fn king_counts() {
        assert_eq!(
            Board::empty().status(),
            Err(PositionError::Empty)
        );
        assert_eq!(
            board("8/8/8/8/8/8/8/4K3 w - - 0 1").status(),
            Err(PositionError::MissingKing(Color::Black))
        );
        assert_eq!(
            board("4k3/8/8/8/8/8/8/K3K3 w - - 0 1").status(),
            Err(PositionError::TooManyKings(Color::White))
        );
    }

    #[test]
    fn adjacent_kings_are_opposite_check() {
        assert_eq!(
            board("8/8/8/3k4/3K4/8/8/8 w - - 0 1").status(),
            Err(PositionError::OppositeCheck)
        );
    }

    #[test]
    fn side_not_to_move_in_check() {
        // White to move while the black king stands in the queen's line.
        assert_eq!(
            board("4k3/8/8/8/4Q3/8/8/K7 w - - 0 1").status(),
            Err(PositionError::OppositeCheck)
        );
        // The same placement with Black to move is an ordinary check.
        let checked = board("4k3/8/8/8/4Q3/8/8/K7 b - - 0 1");
        assert_eq!(checked.status(), Ok(()));
        assert!(checked.is_check());
    }

    #[test]
    fn white_in_check_from_black_piece() {
        let position = board("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(position.is_valid());
        assert!(position.is_check());
    }

    #[test]
    fn pawns_on_back_rank() {
        assert_eq!(
            board("4k3/8/8/8/8/8/8/P3K3 w - - 0 1").status(),
            Err(PositionError::PawnsOnBackRank)
        );
        assert_eq!(
            board("p3k3/8/8/8/8/8/8/4K3 w - - 0 1").status(),
            Err(PositionError::PawnsOnBackRank)
        );
    }

    #[test]
    fn too_many_pawns() {
        assert_eq!(
            board("4k3/8/8/8/8/P7/PPPPPPPP/4K3 w - - 0 1").status(),
            Err(PositionError::TooManyPawns(Color::White))
        );
    }

    #[test]
    fn double_check_from_two_directions_is_possible() {
        // Rook on the file, knight off the line.
        let position = board("8/8/8/8/8/5n2/8/r3K2k w - - 0 1");
        assert_eq!(checkers(&position, Color::White).count(), 2);
        assert_eq!(position.status(), Ok(()));
    }

    #[test]
    fn aligned_double_check_is_impossible() {
        // Rooks on both sides of the king along the first rank.
        assert_eq!(
            board("7k/8/8/8/8/8/8/r3K2r w - - 0 1").status(),
            Err(PositionError::ImpossibleCheck)
        );
    }

    #[test]
    fn three_checkers() {
        assert_eq!(
            board("7k/8/8/8/8/3n4/8/r3K2r w - - 0 1").status(),
            Err(PositionError::TooManyCheckers)
        );
    }

    #[test]
    fn pawn_attackers_use_pawn_direction() {
        let position = board("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
        let king = Square::from_algebraic("e1").unwrap();
        assert!(is_attacked(&position, king, Color::Black));

        let behind = board("4k3/8/8/8/8/8/8/3pK3 w - - 0 1");
        assert!(behind.status().is_err());
        let e2 = Square::from_algebraic("e2").unwrap();
        assert!(!is_attacked(&behind, e2, Color::Black));
    }
}
