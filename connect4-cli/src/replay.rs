//! Replay command - apply a scripted list of moves and report the outcome
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: replay_moves(), report_summary()
//! - Level 3: (delegated to connect4-core)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use connect4_core::{GameConfig, GameController, GameSummary, Phase};

use crate::render::{describe_error, render_board, result_message};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    /// Comma-separated 1-based columns, e.g. "4,4,3,5"
    #[arg(long, value_delimiter = ',', required = true)]
    pub moves: Vec<usize>,

    /// Route each move through the drop-animation phase
    #[arg(long)]
    pub animate: bool,

    /// JSON file with presentation options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output the final game summary as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run replay command
pub fn run(args: ReplayArgs) -> Result<()> {
    let config = crate::load_config(args.config.as_deref(), args.animate)?;

    tracing::info!("Replaying {} moves", args.moves.len());

    let game = replay_moves(&args.moves, &config)?;
    report_summary(&game.summary(), &config, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Apply 1-based moves in order; any rejected move aborts the replay
pub fn replay_moves(moves: &[usize], config: &GameConfig) -> Result<GameController> {
    let mut game = GameController::with_config(config);

    for (i, &column) in moves.iter().enumerate() {
        let col = column
            .checked_sub(1)
            .with_context(|| format!("Move {}: columns are numbered from 1", i + 1))?;

        let phase = game.request_move(col).map_err(|err| {
            anyhow::anyhow!("Move {} (column {}): {}", i + 1, column, describe_error(&err))
        })?;

        if let Phase::Animating(drop) = phase {
            tracing::debug!("Settling drop in column {} at row {}", drop.col, drop.row);
            game.animation_complete()?;
        }
    }

    Ok(game)
}

/// Print the final board and result
fn report_summary(summary: &GameSummary, config: &GameConfig, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(summary)?;
        println!("{}", text);
        return Ok(());
    }

    print!("{}", render_board(&summary.board, config));
    match result_message(&summary.phase, config) {
        Some(msg) => println!("{}", msg),
        None => println!(
            "Game in progress: player {} to move ({} moves played)",
            summary.current_player.number(),
            summary.moves.len()
        ),
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use connect4_core::Player;

    #[test]
    fn test_replay_horizontal_win() {
        let game = replay_moves(&[1, 1, 2, 2, 3, 3, 4], &GameConfig::default()).unwrap();
        assert_eq!(game.winner(), Some(Player::One));
        assert_eq!(game.history().len(), 7);
    }

    #[test]
    fn test_replay_animated_matches_plain() {
        let moves = [4, 4, 3, 5, 2, 6, 1];
        let plain = replay_moves(&moves, &GameConfig::default()).unwrap();
        let animated =
            replay_moves(&moves, &GameConfig::default().with_animation(true)).unwrap();
        assert_eq!(plain.summary(), animated.summary());
    }

    #[test]
    fn test_replay_rejects_zero_column() {
        let err = replay_moves(&[4, 0], &GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Move 2"));
    }

    #[test]
    fn test_replay_rejects_moves_after_win() {
        let err = replay_moves(&[1, 2, 1, 2, 1, 2, 1, 3], &GameConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Move 8 (column 3): cannot request a move while game is won"
        );
    }

    #[test]
    fn test_replay_rejects_full_column() {
        let err = replay_moves(&[5; 7], &GameConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Move 7 (column 5): Column 5 is full");
    }
}
