//! Connect Four CLI - Command-line interface
//!
//! Commands:
//! - play: Interactive two-player game on the console
//! - replay: Apply a scripted move list and report the result

mod play;
mod render;
mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect4_core::GameConfig;

#[derive(Parser)]
#[command(name = "connect4")]
#[command(about = "Two-player connect four for the terminal")]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console
    Play(play::PlayArgs),
    /// Replay a list of moves
    Replay(replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Replay(args) => replay::run(args),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
/// `RUST_LOG` applies unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Presentation options from an optional JSON file; `--animate` forces
/// animation on
pub(crate) fn load_config(path: Option<&Path>, animate: bool) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };

    tracing::debug!("Using config: {:?}", config);

    Ok(if animate {
        config.with_animation(true)
    } else {
        config
    })
}
