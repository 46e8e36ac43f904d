//! Connect Four Core - Rules engine
//!
//! This crate provides the game logic for two-player connect four:
//! - Board model with gravity drops (6 rows x 7 columns)
//! - Win detection over all four line directions
//! - Game controller with turn order, win/draw resolution and an optional
//!   drop-animation phase driven by the presentation layer
//! - Presentation options loaded from JSON

pub mod board;
pub mod config;
pub mod error;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, Cell, Player, Position, WinningLine, COLS, CONNECT, DIRECTIONS, ROWS};
pub use config::GameConfig;
pub use error::MoveError;
pub use game::{GameController, GameEvent, GameSummary, MoveRecord, PendingDrop, Phase};
