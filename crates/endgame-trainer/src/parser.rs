//! Free-form piece input.
//!
//! Users type material as piece letters, e.g. `Qr`, `R, b` or `B N p`.
//! Uppercase letters are White, lowercase are Black; commas and spaces are
//! separators and carry no meaning.

use std::collections::BTreeSet;

use chess_core::Piece;

/// Characters that separate piece symbols.
pub const DELIMITERS: [char; 2] = [',', ' '];

/// Result of tokenizing one line of piece input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPieces {
    /// Recognized pieces in order of appearance, duplicates kept.
    pub pieces: Vec<Piece>,
    /// Characters that are neither delimiters nor piece symbols.
    pub unrecognized: BTreeSet<char>,
}

/// Splits `text` into piece symbols and unrecognized characters.
///
/// Never fails: every character is a delimiter, a piece or reported in
/// [`ParsedPieces::unrecognized`]. Kings are recognized here and rejected
/// later by the validator.
pub fn parse(text: &str) -> ParsedPieces {
    let mut parsed = ParsedPieces::default();
    for c in text.chars().filter(|c| !DELIMITERS.contains(c)) {
        match Piece::from_symbol(c) {
            Some(piece) => parsed.pieces.push(piece),
            None => {
                parsed.unrecognized.insert(c);
            }
        }
    }
    parsed
}

/// Formats pieces as their symbols, e.g. `Q, r`.
pub fn format_pieces(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .map(Piece::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
