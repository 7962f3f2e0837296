//! Trainer configuration loaded from a TOML file.
//!
//! Every key is optional. A missing file is the same as an empty one:
//!
//! ```toml
//! link_base = "https://lichess.org/"
//!
//! [[presets]]
//! name = "K+P"
//! pieces = "P"
//! ```
//!
//! When `presets` is given it replaces the built-in list.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::parser::parse;
use crate::presets::{default_presets, Preset};
use crate::validator::validate;

/// Practice site the generated positions are linked to.
pub const DEFAULT_LINK_BASE: &str = "https://lichess.org/";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// The configuration file is not valid TOML or has wrongly typed keys.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured preset names material the trainer would itself reject.
    #[error("Invalid preset {name:?}: {reason}")]
    InvalidPreset { name: String, reason: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
struct PresetEntry {
    name: String,
    pieces: String,
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    link_base: Option<String>,
    presets: Option<Vec<PresetEntry>>,
}

/// Settings for a trainer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// URL the practice link is built on; the FEN is appended as a query.
    pub link_base: String,
    /// Presets in the order they are numbered in the help.
    pub presets: Vec<Preset>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            link_base: DEFAULT_LINK_BASE.to_string(),
            presets: default_presets(),
        }
    }
}

impl TrainerConfig {
    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, and
    /// [`ConfigError::InvalidPreset`] if a preset fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(link_base) = raw.link_base {
            config.link_base = link_base;
        }
        if let Some(entries) = raw.presets {
            config.presets = entries
                .into_iter()
                .map(preset_from_entry)
                .collect::<Result<_, _>>()?;
        }

        Ok(config)
    }
}

fn preset_from_entry(entry: PresetEntry) -> Result<Preset, ConfigError> {
    let parsed = parse(&entry.pieces);
    if let Some(first) = validate(&parsed).first() {
        return Err(ConfigError::InvalidPreset {
            name: entry.name,
            reason: first.to_string(),
        });
    }
    Ok(Preset {
        name: entry.name,
        pieces: parsed.pieces,
    })
}
