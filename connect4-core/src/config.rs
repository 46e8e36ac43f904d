//! GameConfig - presentation options for a game session

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::{Cell, Player};

/// Options the presentation layer applies to a session.
///
/// Loaded from JSON; missing fields fall back to `Default`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Route accepted moves through the `Animating` phase
    pub animate: bool,
    /// Delay between drop-animation frames, in milliseconds
    pub frame_ms: u64,
    pub player_one_symbol: char,
    pub player_two_symbol: char,
    pub empty_symbol: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            animate: false,
            frame_ms: 80,
            player_one_symbol: 'X',
            player_two_symbol: 'O',
            empty_symbol: '.',
        }
    }
}

impl GameConfig {
    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Set animation opt-in
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Symbol shown for a player's disc
    pub fn player_symbol(&self, player: Player) -> char {
        match player {
            Player::One => self.player_one_symbol,
            Player::Two => self.player_two_symbol,
        }
    }

    /// Symbol shown for a cell
    pub fn cell_symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty_symbol,
            Cell::Disc(player) => self.player_symbol(player),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        let symbols = [
            self.player_one_symbol,
            self.player_two_symbol,
            self.empty_symbol,
        ];
        if symbols[0] == symbols[1] || symbols[0] == symbols[2] || symbols[1] == symbols[2] {
            anyhow::bail!("disc and empty symbols must be distinct, got {:?}", symbols);
        }
        Ok(())
    }
}
