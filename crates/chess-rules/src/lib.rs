//! Chess rules for placement-only positions.
//!
//! This crate answers the questions a position generator needs answered:
//! - [`Board`] - piece placement and side to move, backed by [`Bitboard`]s
//! - [`Board::status`] - whether the placement could occur in a real game
//! - [`legal_moves`] - legal move generation for the side to move
//! - [`Board::outcome`] - checkmate, stalemate and dead draws
//! - FEN encoding via [`Board::to_fen`]
//!
//! # Example
//!
//! ```
//! use chess_rules::Board;
//!
//! let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
//! assert!(board.is_valid());
//! assert!(!board.is_game_over());
//! ```

pub mod attacks;
mod bitboard;
mod board;
mod fen;
pub mod movegen;
mod outcome;
mod status;

pub use bitboard::Bitboard;
pub use board::Board;
pub use fen::FenError;
pub use movegen::{has_legal_move, legal_moves, make_move};
pub use outcome::Outcome;
pub use status::{attackers_of, checkers, is_attacked, PositionError};
