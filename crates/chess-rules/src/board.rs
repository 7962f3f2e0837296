//! Board representation.

use chess_core::{Color, Piece, PieceKind, Square};

use crate::Bitboard;

/// Piece placement plus side to move.
///
/// Boards built for practice positions never carry castling rights or an
/// en passant square, and their clocks always read `0 1`, so those fields
/// are not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Bitboards for each piece kind, indexed by `PieceKind`.
    kinds: [Bitboard; 6],

    /// Bitboards for each color's pieces.
    colors: [Bitboard; 2],

    turn: Color,
}

impl Board {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        Board {
            kinds: [Bitboard::EMPTY; 6],
            colors: [Bitboard::EMPTY; 2],
            turn: Color::White,
        }
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let color = Color::ALL
            .into_iter()
            .find(|color| self.colors[color.index()].contains(sq))?;
        let kind = PieceKind::ALL
            .into_iter()
            .find(|kind| self.kinds[kind.index()].contains(sq))?;
        Some(Piece::new(kind, color))
    }

    /// Puts `piece` on `sq`, replacing whatever stood there.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        self.kinds[piece.kind.index()].set(sq);
        self.colors[piece.color.index()].set(sq);
    }

    /// Clears `sq` and returns the piece that stood there.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.kinds[piece.kind.index()].clear(sq);
        self.colors[piece.color.index()].clear(sq);
        Some(piece)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn by_kind(&self, kind: PieceKind) -> Bitboard {
        self.kinds[kind.index()]
    }

    /// Returns a bitboard of pieces of the given kind and color.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.kinds[kind.index()] & self.colors[color.index()]
    }

    /// The square of `color`'s king, if there is exactly one.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(PieceKind::King, color);
        if kings.count() == 1 {
            kings.first()
        } else {
            None
        }
    }

    /// Iterates over all pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .into_iter()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
