//! Sanity rules for requested material.

use std::collections::BTreeSet;

use chess_core::{Color, PieceKind};
use thiserror::Error;

use crate::parser::ParsedPieces;

/// Most non-king pieces one side may be given.
pub const MAX_PIECES_PER_COLOR: usize = 15;

/// Most pawns one side may be given.
pub const MAX_PAWNS_PER_COLOR: usize = 8;

/// A reason to reject requested material before any placement is tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Unknown pieces: {}.", join_symbols(.0))]
    UnrecognizedSymbols(BTreeSet<char>),

    #[error("Kings are placed automatically; remove K/k.")]
    KingsNotAllowed,

    #[error("There can not be more than 16 {} pieces.", .0.name())]
    TooManyPiecesForColor(Color),

    #[error("There can not be more than 8 {} pawns.", .0.name())]
    TooManyPawnsForColor(Color),

    #[error("No pieces given.")]
    NoPieces,
}

fn join_symbols(symbols: &BTreeSet<char>) -> String {
    symbols
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks parsed input against every rule and reports all violations.
///
/// An empty result means the pieces may be handed to the generator.
pub fn validate(parsed: &ParsedPieces) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !parsed.unrecognized.is_empty() {
        violations.push(Violation::UnrecognizedSymbols(parsed.unrecognized.clone()));
    }

    if parsed.pieces.iter().any(|p| p.kind == PieceKind::King) {
        violations.push(Violation::KingsNotAllowed);
    }

    for color in Color::ALL {
        let count = parsed
            .pieces
            .iter()
            .filter(|p| p.color == color && p.kind != PieceKind::King)
            .count();
        if count > MAX_PIECES_PER_COLOR {
            violations.push(Violation::TooManyPiecesForColor(color));
        }
    }

    for color in Color::ALL {
        let pawns = parsed
            .pieces
            .iter()
            .filter(|p| p.color == color && p.kind == PieceKind::Pawn)
            .count();
        if pawns > MAX_PAWNS_PER_COLOR {
            violations.push(Violation::TooManyPawnsForColor(color));
        }
    }

    if violations.is_empty() && parsed.pieces.is_empty() {
        violations.push(Violation::NoPieces);
    }

    violations
}
