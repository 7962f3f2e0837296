//! Named endgame drills selectable by number.

use chess_core::Piece;

use crate::parser::parse;

/// A named piece set the user can pick by its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub pieces: Vec<Piece>,
}

impl Preset {
    /// Builds a preset from piece symbols, e.g. `Preset::new("B+N", "BN")`.
    ///
    /// Returns `None` if `symbols` contains anything but piece letters and
    /// delimiters.
    pub fn new(name: impl Into<String>, symbols: &str) -> Option<Self> {
        let parsed = parse(symbols);
        if !parsed.unrecognized.is_empty() {
            return None;
        }
        Some(Preset {
            name: name.into(),
            pieces: parsed.pieces,
        })
    }
}

/// The classic basic mates: queen, rook, two bishops, bishop and knight.
pub fn default_presets() -> Vec<Preset> {
    [("Q", "Q"), ("R", "R"), ("B+B", "BB"), ("B+N", "BN")]
        .into_iter()
        .filter_map(|(name, symbols)| Preset::new(name, symbols))
        .collect()
}

/// Looks up a preset by the number shown in the help, counting from 1.
///
/// `line` is trimmed first. Anything that is not a listed number yields
/// `None` and is treated as piece input by the caller.
pub fn select<'a>(presets: &'a [Preset], line: &str) -> Option<&'a Preset> {
    let number: usize = line.trim().parse().ok()?;
    presets.get(number.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::format_pieces;

    #[test]
    fn defaults() {
        let presets = default_presets();
        let listed: Vec<(String, String)> = presets
            .iter()
            .map(|p| (p.name.clone(), format_pieces(&p.pieces)))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("Q".to_string(), "Q".to_string()),
                ("R".to_string(), "R".to_string()),
                ("B+B".to_string(), "B, B".to_string()),
                ("B+N".to_string(), "B, N".to_string()),
            ]
        );
    }

    #[test]
    fn select_by_number() {
        let presets = default_presets();
        assert_eq!(select(&presets, "1").map(|p| p.name.as_str()), Some("Q"));
        assert_eq!(select(&presets, " 4 ").map(|p| p.name.as_str()), Some("B+N"));
        assert_eq!(select(&presets, "0"), None);
        assert_eq!(select(&presets, "5"), None);
        assert_eq!(select(&presets, "-1"), None);
        assert_eq!(select(&presets, "Q"), None);
        assert_eq!(select(&presets, ""), None);
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(Preset::new("bad", "Qx").is_none());
        assert_eq!(Preset::new("rook", "R, r").map(|p| p.pieces.len()), Some(2));
    }
}
