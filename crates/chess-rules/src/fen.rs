//! Reading and writing boards as FEN.
//!
//! Only placement and side to move carry information; castling and en passant
//! are always `-` and the clocks always `0 1`.

use chess_core::{Color, Piece, Square};
use thiserror::Error;

use crate::Board;

/// Errors that can occur when reading a FEN string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN needs 6 fields, found {0}")]
    InvalidPartCount(usize),

    #[error("bad piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("side to move must be 'w' or 'b', not '{0}'")]
    InvalidActiveColor(String),
}

impl Board {
    /// Encodes the board as FEN.
    ///
    /// Castling and en passant are always `-` and the clocks `0 1`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_count = 0;
            for file in 0..8 {
                let piece = Square::new(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.symbol());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.turn().fen_char());
        fen.push_str(" - - 0 1");
        fen
    }

    /// Reads piece placement and side to move from a FEN string.
    ///
    /// The remaining four fields must be present but are not interpreted.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file = file.saturating_add(skip as u8);
                } else if let Some(piece) = Piece::from_symbol(c) {
                    let sq = Square::new(file, rank).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!("rank {} is too long", rank + 1))
                    })?;
                    board.set_piece_at(sq, piece);
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank + 1,
                    file
                )));
            }
        }

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };
        board.set_turn(turn);

        Ok(board)
    }
}
