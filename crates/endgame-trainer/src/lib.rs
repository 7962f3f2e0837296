//! Random legal endgame positions for practice.
//!
//! A session reads a preset number or a list of piece symbols, places the
//! pieces and both kings on a legal board, and prints the board with a link
//! that opens the position against an engine.
//!
//! # Example
//!
//! ```
//! use chess_rules::Board;
//! use endgame_trainer::{parse, validate, PositionGenerator};
//!
//! let parsed = parse("Qr");
//! assert!(validate(&parsed).is_empty());
//!
//! let board: Board = PositionGenerator::seeded(1).generate(&parsed.pieces).unwrap();
//! assert!(board.is_valid());
//! assert!(!board.is_game_over());
//! ```

pub mod config;
pub mod generator;
pub mod link;
pub mod oracle;
pub mod parser;
pub mod presets;
pub mod render;
pub mod session;
pub mod validator;

pub use config::{ConfigError, TrainerConfig};
pub use generator::{PlacementFailed, PositionGenerator};
pub use link::practice_link;
pub use oracle::PlacementOracle;
pub use parser::{format_pieces, parse, ParsedPieces};
pub use presets::Preset;
pub use session::{Generated, Input, Outcome, SessionController, SessionState};
pub use validator::{validate, Violation};
