//! The interactive loop: read a selection, generate a position, repeat.
//!
//! [`SessionController::handle`] is the whole state machine and does no I/O;
//! [`SessionController::run`] wires it to a reader and a writer.

use std::io::{self, BufRead, Write};

use chess_core::Piece;
use chess_rules::Board;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::config::TrainerConfig;
use crate::generator::{PlacementFailed, PositionGenerator};
use crate::link::practice_link;
use crate::parser::parse;
use crate::presets::{self, Preset};
use crate::render;
use crate::validator::{validate, Violation};

/// Where the session is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Help,
    Processing,
    Terminated,
}

/// One unit of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// A line without its line terminator.
    Line(&'a str),
    /// The input stream is closed.
    EndOfInput,
}

/// What handling one input produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to do; ask again.
    Reprompt,
    Help,
    /// The input broke one or more rules; nothing was generated.
    Rejected(Vec<Violation>),
    Generated(Generated),
    Failed(PlacementFailed),
    Terminated,
}

/// A successfully generated position.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Preset name, or the piece symbols of a typed request.
    pub label: String,
    pub pieces: Vec<Piece>,
    pub board: Board,
    pub fen: String,
    pub link: String,
}

/// The last selection that produced a position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    label: String,
    pieces: Vec<Piece>,
}

/// Drives one trainer session.
pub struct SessionController<R = StdRng> {
    generator: PositionGenerator<R>,
    presets: Vec<Preset>,
    link_base: String,
    previous: Option<Selection>,
    state: SessionState,
}

impl<R: Rng> SessionController<R> {
    pub fn new(config: TrainerConfig, generator: PositionGenerator<R>) -> Self {
        SessionController {
            generator,
            presets: config.presets,
            link_base: config.link_base,
            previous: None,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Label of the selection an empty line repeats, if any.
    pub fn previous_label(&self) -> Option<&str> {
        self.previous.as_ref().map(|s| s.label.as_str())
    }

    /// The prompt for the next line.
    pub fn prompt(&self) -> String {
        match self.previous_label() {
            Some(label) => format!("Position (enter = {}): ", label),
            None => "Position: ".to_string(),
        }
    }

    /// Handles one input and returns what should be shown to the user.
    ///
    /// A terminated session stays terminated.
    pub fn handle(&mut self, input: Input<'_>) -> Outcome {
        if self.state == SessionState::Terminated {
            return Outcome::Terminated;
        }

        let line = match input {
            Input::EndOfInput => {
                self.transition(SessionState::Terminated);
                return Outcome::Terminated;
            }
            Input::Line(line) => line,
        };

        if line.is_empty() {
            return match self.previous.clone() {
                Some(selection) => self.process(selection),
                None => Outcome::Reprompt,
            };
        }

        let command = line.trim();
        if command.eq_ignore_ascii_case("h") || command.eq_ignore_ascii_case("help") {
            self.transition(SessionState::Help);
            self.transition(SessionState::AwaitingInput);
            return Outcome::Help;
        }

        if let Some(preset) = presets::select(&self.presets, line) {
            let selection = Selection {
                label: preset.name.clone(),
                pieces: preset.pieces.clone(),
            };
            return self.process(selection);
        }

        let parsed = parse(line);
        let violations = validate(&parsed);
        if !violations.is_empty() {
            debug!(input = line, count = violations.len(), "rejected piece input");
            return Outcome::Rejected(violations);
        }

        let label = parsed.pieces.iter().map(|p| p.symbol()).collect();
        self.process(Selection {
            label,
            pieces: parsed.pieces,
        })
    }

    fn process(&mut self, selection: Selection) -> Outcome {
        self.transition(SessionState::Processing);
        let outcome = match self.generator.generate::<Board>(&selection.pieces) {
            Ok(board) => {
                let fen = board.to_fen();
                let link = practice_link(&self.link_base, &fen);
                self.previous = Some(selection.clone());
                Outcome::Generated(Generated {
                    label: selection.label,
                    pieces: selection.pieces,
                    board,
                    fen,
                    link,
                })
            }
            Err(failed) => Outcome::Failed(failed),
        };
        self.transition(SessionState::AwaitingInput);
        outcome
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
    }

    /// Runs the loop until `input` is exhausted.
    ///
    /// Help is shown once before the first prompt.
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, out: &mut W) -> io::Result<()> {
        render::write_help(out, &self.presets)?;
        let mut buf = Vec::new();

        loop {
            write!(out, "{}", self.prompt().green())?;
            out.flush()?;

            // Bytes that are not UTF-8 become U+FFFD and are reported as an
            // unknown piece instead of ending the session.
            buf.clear();
            let outcome = if input.read_until(b'\n', &mut buf)? == 0 {
                self.handle(Input::EndOfInput)
            } else {
                let line = String::from_utf8_lossy(&buf);
                self.handle(Input::Line(line.trim_end_matches(['\n', '\r'])))
            };

            render::write_outcome(out, &outcome, &self.presets)?;
            if matches!(outcome, Outcome::Terminated) {
                return Ok(());
            }
        }
    }
}
