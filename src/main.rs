//! Headless runner (default binary).
//!
//! Reads a command script from a file or stdin, drives the engine through it, and writes
//! one JSON observation per step plus a final observation to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use blockfall::core::{Game, GameConfig};
use blockfall::script::{parse_script, run_script};
use blockfall::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Run a falling-block command script headlessly")]
struct Args {
    /// Board width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Board height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Randomizer seed (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Level to start at
    #[arg(long, default_value_t = 1)]
    start_level: u32,

    /// Script file; reads stdin when omitted
    script: Option<PathBuf>,
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading script from stdin")?;
            text
        }
    };
    let steps = parse_script(&text)?;

    let config = GameConfig {
        width: args.width,
        height: args.height,
        seed: args.seed.unwrap_or_else(clock_seed),
        start_level: args.start_level,
    };
    let mut game = Game::new(config).context("invalid game configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&mut game, &steps, &mut out)
}
