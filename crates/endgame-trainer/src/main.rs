//! Endgame trainer - practise basic mates from random legal positions.
//!
//! Reads a preset number or piece symbols per line from stdin, prints the
//! generated board and a practice link to stdout, and logs to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use endgame_trainer::{PositionGenerator, SessionController, TrainerConfig};
use tracing_subscriber::EnvFilter;

const DESCRIPTION: &str = "Generate chess positions and practise on Lichess.";

/// Endgame trainer - random legal endgame positions for practice.
#[derive(Parser)]
#[command(name = "endgame-trainer", version)]
#[command(about = DESCRIPTION)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "trainer.toml")]
    config: PathBuf,

    /// Seed for reproducible positions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let config = TrainerConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    tracing::info!(
        "Loaded {} presets, linking to {}",
        config.presets.len(),
        config.link_base
    );

    let generator = match args.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            PositionGenerator::seeded(seed)
        }
        None => PositionGenerator::from_entropy(),
    };

    println!("{}", DESCRIPTION);
    let mut session = SessionController::new(config, generator);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
