//! Random legal position generation.
//!
//! Pieces are placed one at a time on a random empty square. Every placement
//! must keep the board legal; when a piece fits nowhere, the search backs up
//! and moves the previous piece to its next candidate square. Candidates are
//! shuffled, but every empty square is eventually tried, so generation fails
//! only when no legal arrangement of the requested material exists.

use chess_core::{Color, Piece, PieceKind, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use crate::oracle::PlacementOracle;
use crate::parser::format_pieces;

const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

/// The requested material admits no legal arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot set {} on the board.", format_pieces(.pieces))]
pub struct PlacementFailed {
    /// The pieces that were requested, in request order.
    pub pieces: Vec<Piece>,
}

/// Places two kings plus requested material on a legal board.
pub struct PositionGenerator<R = StdRng> {
    rng: R,
}

impl PositionGenerator<StdRng> {
    /// Creates a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a generator that produces the same positions on every run.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PositionGenerator<R> {
    pub fn new(rng: R) -> Self {
        PositionGenerator { rng }
    }

    /// Builds a legal board holding both kings and every piece in `request`.
    ///
    /// The finished board must not be a decided game. Partial boards are only
    /// required to be legal: a subset of the material may well be stalemate.
    pub fn generate<B>(&mut self, request: &[Piece]) -> Result<B, PlacementFailed>
    where
        B: PlacementOracle + Default,
    {
        let failed = || PlacementFailed {
            pieces: request.to_vec(),
        };

        let mut board = B::default();
        let white_king = Square::from_index(self.rng.gen_range(0..Square::COUNT as u8))
            .ok_or_else(failed)?;
        board.place(white_king, WHITE_KING);

        let mut search = Search {
            rng: &mut self.rng,
            candidates: 0,
        };

        // Two kings alone are always a dead draw, so the game-over rule
        // cannot apply to the black king.
        if !search.place_all(&mut board, &[BLACK_KING], false) {
            return Err(failed());
        }
        if !request.is_empty() && !search.place_all(&mut board, request, true) {
            debug!(
                pieces = %format_pieces(request),
                candidates = search.candidates,
                "no legal arrangement"
            );
            return Err(failed());
        }

        debug!(
            pieces = %format_pieces(request),
            candidates = search.candidates,
            "position generated"
        );
        Ok(board)
    }
}

struct Search<'a, R> {
    rng: &'a mut R,
    candidates: usize,
}

impl<R: Rng> Search<'_, R> {
    /// Places `pieces` in order, backtracking over shuffled empty squares.
    ///
    /// On success the pieces stay on the board; on failure the board is
    /// left as it was.
    fn place_all<B: PlacementOracle>(
        &mut self,
        board: &mut B,
        pieces: &[Piece],
        check_game_over: bool,
    ) -> bool {
        let Some((&piece, rest)) = pieces.split_first() else {
            return !(check_game_over && board.is_game_over());
        };

        let occupied = board.occupied_squares();
        let mut squares: Vec<Square> = Square::all()
            .filter(|sq| !occupied.contains(sq))
            .collect();
        squares.shuffle(&mut *self.rng);

        for square in squares {
            self.candidates += 1;
            board.place(square, piece);
            if board.is_legal() && self.place_all(board, rest, check_game_over) {
                return true;
            }
            board.remove(square);
        }

        false
    }
}
