//! Play command - interactive two-player game on the console
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - prompt/move/report loop
//! - Level 3: settle_move(), animate_drop(), ask_play_again()
//! - Level 4: input parsing utilities

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use connect4_core::{Board, GameConfig, GameController, GameEvent, PendingDrop, COLS};

use crate::render::{describe_error, drop_path, render_board, render_frame, result_message};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Animate each disc falling into place
    #[arg(long)]
    pub animate: bool,

    /// JSON file with presentation options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    /// 0-based column
    Column(usize),
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command on stdin/stdout
pub fn run(args: PlayArgs) -> Result<()> {
    let config = crate::load_config(args.config.as_deref(), args.animate)?;

    tracing::info!("Starting console game (animate={})", config.animate);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config)
}

// ============================================================================
// LEVEL 2 - SESSION LOOP
// ============================================================================

/// Play games until the input ends or a player quits
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: &GameConfig,
) -> Result<()> {
    let mut game = GameController::with_config(config);

    writeln!(out, "Welcome to Connect Four!")?;
    write!(out, "{}", render_board(game.board(), config))?;

    loop {
        let player = game.current_player();
        write!(
            out,
            "Player {} ({}), enter a column (1-{}): ",
            player.number(),
            config.player_symbol(player),
            COLS
        )?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out)?;
            return Ok(());
        };

        let col = match parse_input(&line) {
            Ok(Input::Column(col)) => col,
            Ok(Input::Quit) => return Ok(()),
            Err(msg) => {
                writeln!(out, "{}. Try again.", msg)?;
                continue;
            }
        };

        if let Err(err) = game.request_move(col) {
            writeln!(out, "Invalid move: {}. Try again.", describe_error(&err))?;
            continue;
        }

        settle_move(&mut game, &mut out, config)?;
        write!(out, "{}", render_board(game.board(), config))?;

        if let Some(msg) = result_message(&game.phase(), config) {
            writeln!(out, "{}", msg)?;
            if !ask_play_again(&mut input, &mut out)? {
                return Ok(());
            }
            game.reset();
            // Only GameReset is queued; the fresh board is printed below
            game.take_events();
            write!(out, "{}", render_board(game.board(), config))?;
        }
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Drain game events, playing any drop animation they request
fn settle_move<W: Write>(game: &mut GameController, out: &mut W, config: &GameConfig) -> Result<()> {
    loop {
        let events = game.take_events();
        if events.is_empty() {
            return Ok(());
        }

        for event in events {
            tracing::debug!(?event, "game event");
            if let GameEvent::AnimationStarted(drop) = event {
                animate_drop(game.board(), &drop, out, config)?;
                game.animation_complete()?;
            }
        }
    }
}

/// Print one frame per row the disc falls through; the final row is left to
/// the caller's board print
fn animate_drop<W: Write>(
    board: &Board,
    drop: &PendingDrop,
    out: &mut W,
    config: &GameConfig,
) -> Result<()> {
    let delay = Duration::from_millis(config.frame_ms);
    for row in drop_path(drop).take(drop.row) {
        write!(out, "{}", render_frame(board, config, drop, row))?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "Play again? (y/n): ")?;
    out.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Next input line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Parse a 1-based column or a quit command.
///
/// Numbers above the grid are passed through for the game to reject.
fn parse_input(line: &str) -> Result<Input, String> {
    let text = line.trim();
    if matches!(text.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Input::Quit);
    }

    let number: i64 = text
        .parse()
        .map_err(|_| format!("'{}' is not a column number", text))?;
    number
        .checked_sub(1)
        .and_then(|n| usize::try_from(n).ok())
        .map(Input::Column)
        .ok_or_else(|| format!("Column must be between 1 and {}", COLS))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, config: &GameConfig) -> String {
        let mut out = Vec::new();
        run_session(Cursor::new(input.as_bytes()), &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("1\n"), Ok(Input::Column(0)));
        assert_eq!(parse_input(" 7 "), Ok(Input::Column(6)));
        assert_eq!(parse_input("8"), Ok(Input::Column(7)));
        assert_eq!(parse_input("q"), Ok(Input::Quit));
        assert!(parse_input("0").is_err());
        assert!(parse_input("-2").is_err());
        assert!(parse_input("abc").is_err());
    }

    #[test]
    fn test_session_vertical_win() {
        let out = session("1\n2\n1\n2\n1\n2\n1\nn\n", &GameConfig::default());
        assert!(out.starts_with("Welcome to Connect Four!"));
        assert!(out.contains("Player 1 (X) wins!"));
        assert!(out.ends_with("Play again? (y/n): "));
    }

    #[test]
    fn test_session_reprompts_on_bad_input() {
        let out = session("x\n9\n1\n", &GameConfig::default());
        assert!(out.contains("'x' is not a column number. Try again."));
        assert!(out.contains("Invalid move: Column must be between 1 and 7. Try again."));
        assert!(out.contains("Player 2 (O), enter a column"));
    }

    #[test]
    fn test_session_full_column() {
        let out = session("1\n1\n1\n1\n1\n1\n1\nq\n", &GameConfig::default());
        // Six discs alternate so nobody wins; the seventh is rejected
        assert!(out.contains("Invalid move: Column 1 is full. Try again."));
    }

    #[test]
    fn test_session_play_again_resets() {
        let out = session("1\n2\n1\n2\n1\n2\n1\ny\n4\nq\n", &GameConfig::default());
        assert_eq!(out.matches("wins!").count(), 1);
        let after_reset = out.rsplit("Play again? (y/n): ").next().unwrap();
        assert!(after_reset.contains(". . . X . . . "));
    }

    #[test]
    fn test_session_with_animation() {
        let config = GameConfig {
            frame_ms: 0,
            ..GameConfig::default()
        }
        .with_animation(true);
        let out = session("3\nq\n", &config);

        // Five falling frames plus the settled board
        assert_eq!(out.matches(". . X . . . . \n").count(), 5 + 1);
        assert!(out.contains("Player 2 (O), enter a column"));
    }
}
