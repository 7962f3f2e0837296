//! Game outcome detection.

use chess_core::{Color, PieceKind};

use crate::movegen::has_legal_move;
use crate::{Bitboard, Board};

/// How a game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is checkmated.
    Checkmate { winner: Color },
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
    /// The side to move has no legal moves and is not in check.
    Stalemate,
}

impl Board {
    /// Returns the outcome if the game is already decided, otherwise `None`.
    ///
    /// Only conditions visible from the placement are considered; there is no
    /// move history, so clocks and repetitions never end the game.
    pub fn outcome(&self) -> Option<Outcome> {
        let can_move = has_legal_move(self);
        if !can_move && self.is_check() {
            return Some(Outcome::Checkmate {
                winner: self.turn().opposite(),
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if !can_move {
            return Some(Outcome::Stalemate);
        }
        None
    }

    /// Returns true if the game is over.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns true if neither side has sufficient material to checkmate.
    pub fn is_insufficient_material(&self) -> bool {
        Color::ALL
            .into_iter()
            .all(|color| self.has_insufficient_material(color))
    }

    /// Returns true if `color` cannot mate by any sequence of legal moves.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let ours = self.by_color(color);
        let heavy =
            self.by_kind(PieceKind::Pawn) | self.by_kind(PieceKind::Rook) | self.by_kind(PieceKind::Queen);
        if (ours & heavy).is_not_empty() {
            return false;
        }

        // A knight mates only with help from enemy pieces that can block the
        // king's escape; queens never end up smothering their own king.
        if (ours & self.by_kind(PieceKind::Knight)).is_not_empty() {
            let blockers = self.by_color(color.opposite())
                & !self.by_kind(PieceKind::King)
                & !self.by_kind(PieceKind::Queen);
            return ours.count() <= 2 && blockers.is_empty();
        }

        if (ours & self.by_kind(PieceKind::Bishop)).is_not_empty() {
            let bishops = self.by_kind(PieceKind::Bishop);
            let same_color = (bishops & Bitboard::DARK_SQUARES).is_empty()
                || (bishops & Bitboard::LIGHT_SQUARES).is_empty();
            return same_color
                && self.by_kind(PieceKind::Pawn).is_empty()
                && self.by_kind(PieceKind::Knight).is_empty();
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn bare_kings_are_a_dead_draw() {
        let position = board("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(position.outcome(), Some(Outcome::InsufficientMaterial));
        assert!(position.is_game_over());
    }

    #[test]
    fn minor_piece_endings() {
        assert!(board("4k3/8/8/8/8/8/8/3NK3 w - - 0 1").is_insufficient_material());
        assert!(board("4k3/8/8/8/8/8/8/3BK3 w - - 0 1").is_insufficient_material());
        // Bishop and knight can mate.
        assert!(!board("4k3/8/8/8/8/8/8/2NBK3 w - - 0 1").is_insufficient_material());
        // Bishops on opposite colors can mate.
        assert!(!board("4k3/8/8/8/8/8/8/2BBK3 w - - 0 1").is_insufficient_material());
        // Bishops all on one color cannot.
        assert!(board("4k3/8/8/8/8/8/8/1B1BK3 w - - 0 1").is_insufficient_material());
    }

    #[test]
    fn knight_against_minor_piece_is_not_dead() {
        let position = board("4k3/8/2b5/8/8/8/8/3NK3 w - - 0 1");
        assert!(!position.has_insufficient_material(Color::White));
        assert!(!position.has_insufficient_material(Color::Black));
        assert!(!position.is_insufficient_material());

        let lone_bishop = board("4k3/8/2b5/8/8/8/8/4K3 w - - 0 1");
        assert!(lone_bishop.has_insufficient_material(Color::Black));
    }

    #[test]
    fn heavy_material_is_sufficient() {
        let position = board("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        assert!(!position.is_insufficient_material());
        assert_eq!(position.outcome(), None);
    }

    #[test]
    fn checkmate_names_the_winner() {
        let mated = board("R6k/6pp/8/8/8/8/8/K7 b - - 0 1");
        assert_eq!(
            mated.outcome(),
            Some(Outcome::Checkmate {
                winner: Color::White
            })
        );
    }

    #[test]
    fn stalemate() {
        // Black king in the corner, queen covering every flight square.
        let position = board("7k/8/6Q1/8/8/8/8/K7 b - - 0 1");
        assert!(!position.is_check());
        assert_eq!(position.outcome(), Some(Outcome::Stalemate));
    }
}
