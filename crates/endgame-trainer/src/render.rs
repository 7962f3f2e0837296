//! Terminal output for the trainer loop.

use std::io::{self, Write};

use chess_core::Square;
use chess_rules::Board;
use colored::Colorize;

use crate::presets::Preset;
use crate::session::Outcome;

const FILES: &str = "a b c d e f g h";

/// Draws the board from White's side, rank 8 at the top.
///
/// ```text
/// 8 . . . . k . . .
/// ...
/// 1 . . . Q K . . .
///   a b c d e f g h
/// ```
pub fn board_diagram(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank));
        for file in 0..8 {
            let symbol = Square::new(file, rank)
                .and_then(|sq| board.piece_at(sq))
                .map_or('.', |piece| piece.symbol());
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out.push_str("  ");
    out.push_str(FILES);
    out
}

/// Lists the presets by number and the in-session commands.
pub fn write_help<W: Write>(out: &mut W, presets: &[Preset]) -> io::Result<()> {
    writeln!(out, "{}", "Positions".bold())?;
    for (i, preset) in presets.iter().enumerate() {
        writeln!(out, "  {:>2}  {}", i + 1, preset.name)?;
    }
    writeln!(
        out,
        "  or type pieces, e.g. {} or {} (QRBNPqrbnp, uppercase is White)",
        "Qr".green(),
        "B, N".green()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "Commands".bold())?;
    writeln!(out, "  h, help   Help")?;
    writeln!(out, "  enter     Use previous choice")?;
    writeln!(out, "  Ctrl+D    Quit")?;
    Ok(())
}

/// Prints the result of one handled line. `Reprompt` prints nothing.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, presets: &[Preset]) -> io::Result<()> {
    match outcome {
        Outcome::Reprompt => {}
        Outcome::Help => write_help(out, presets)?,
        Outcome::Rejected(violations) => {
            for violation in violations {
                writeln!(out, "{}", violation.to_string().red())?;
            }
        }
        Outcome::Generated(generated) => {
            writeln!(out, "{}", board_diagram(&generated.board))?;
            writeln!(out, "{}", generated.link)?;
        }
        Outcome::Failed(failed) => writeln!(out, "{}", failed.to_string().red())?,
        Outcome::Terminated => {
            writeln!(out)?;
            writeln!(out, "Bye!")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::default_presets;

    fn rendered(outcome: &Outcome) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, outcome, &default_presets()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn diagram_from_whites_side() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(
            board_diagram(&board),
            "8 . . . . k . . .\n\
             7 . . . . . . . .\n\
             6 . . . . . . . .\n\
             5 . . . . . . . .\n\
             4 . . . . . . . .\n\
             3 . . . . . . . .\n\
             2 . . . . . . . .\n\
             1 . . . Q K . . .\n\
             \x20 a b c d e f g h"
        );
    }

    #[test]
    fn help_numbers_presets_from_one() {
        let mut buf = Vec::new();
        write_help(&mut buf, &default_presets()).unwrap();
        let help = String::from_utf8(buf).unwrap();
        assert!(help.contains("   1  Q\n"));
        assert!(help.contains("   4  B+N\n"));
        assert!(help.contains("Use previous choice"));
        assert!(help.contains("Ctrl+D"));
    }

    #[test]
    fn farewell() {
        assert_eq!(rendered(&Outcome::Terminated), "\nBye!\n");
        assert_eq!(rendered(&Outcome::Reprompt), "");
    }
}
