//! Game controller: turn order, win/draw resolution and the drop-animation
//! state machine

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, WinningLine};
use crate::config::GameConfig;
use crate::error::MoveError;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A disc that has been committed to the board but not yet visually settled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDrop {
    pub player: Player,
    pub col: usize,
    pub row: usize,
}

/// Game phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    AwaitingMove,
    Animating(PendingDrop),
    Won(Player, WinningLine),
    Draw,
}

impl Phase {
    /// Won or Draw
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(..) | Phase::Draw)
    }

    /// Short description used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Phase::AwaitingMove => "awaiting a move",
            Phase::Animating(_) => "a drop is animating",
            Phase::Won(..) => "game is won",
            Phase::Draw => "game is drawn",
        }
    }
}

/// A committed move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub col: usize,
    pub row: usize,
}

/// State-change notification for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DiscDropped(MoveRecord),
    AnimationStarted(PendingDrop),
    TurnChanged(Player),
    GameWon { player: Player, line: WinningLine },
    GameDrawn,
    GameReset,
}

/// Serializable snapshot of a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub phase: Phase,
    pub current_player: Player,
    pub winner: Option<Player>,
    pub moves: Vec<MoveRecord>,
    pub board: Board,
}

// ============================================================================
// GAME CONTROLLER
// ============================================================================

/// Owns the board and the turn/animation state of one game
#[derive(Clone, Debug, Default)]
pub struct GameController {
    board: Board,
    current_player: Player,
    phase: Phase,
    animate: bool,
    history: Vec<MoveRecord>,
    events: Vec<GameEvent>,
}

impl GameController {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game without drop animation
    pub fn new() -> Self {
        Self::default()
    }

    /// New game using the animation setting from `config`
    pub fn with_config(config: &GameConfig) -> Self {
        let mut game = Self::new();
        game.set_animation(config.animate);
        game
    }

    /// Opt in or out of the `Animating` phase for subsequent moves
    pub fn set_animation(&mut self, animate: bool) {
        self.animate = animate;
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the player who ended the game
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn animation_enabled(&self) -> bool {
        self.animate
    }

    /// Winning line, only once the game is won
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.phase {
            Phase::Won(_, line) => Some(line),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(player, _) => Some(player),
            _ => None,
        }
    }

    /// Committed moves in play order
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Drain queued notifications, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            phase: self.phase,
            current_player: self.current_player,
            winner: self.winner(),
            moves: self.history.clone(),
            board: self.board.clone(),
        }
    }

    // ========================================================================
    // COMMANDS
    // ========================================================================

    /// Drop the current player's disc into `col` (0-based).
    ///
    /// Returns the phase after the move. A rejected move changes nothing.
    pub fn request_move(&mut self, col: usize) -> Result<Phase, MoveError> {
        if self.phase != Phase::AwaitingMove {
            return Err(self.illegal("request a move"));
        }

        let player = self.current_player;
        let row = match self.board.drop_disc(col, player) {
            Ok(row) => row,
            Err(err) => {
                tracing::debug!("Player {} move rejected: {}", player.number(), err);
                return Err(err);
            }
        };

        let record = MoveRecord { player, col, row };
        tracing::debug!("Player {} dropped into column {} (row {})", player.number(), col, row);
        self.history.push(record);
        self.events.push(GameEvent::DiscDropped(record));

        if self.animate {
            let pending = PendingDrop { player, col, row };
            self.phase = Phase::Animating(pending);
            self.events.push(GameEvent::AnimationStarted(pending));
            return Ok(self.phase);
        }

        Ok(self.resolve(player))
    }

    /// Finish the pending drop animation and resolve the move
    pub fn animation_complete(&mut self) -> Result<Phase, MoveError> {
        match self.phase {
            Phase::Animating(pending) => Ok(self.resolve(pending.player)),
            _ => Err(self.illegal("complete an animation")),
        }
    }

    /// Start over with an empty board; allowed in any phase
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.phase = Phase::AwaitingMove;
        self.history.clear();
        self.events.push(GameEvent::GameReset);
        tracing::debug!("Game reset");
    }

    // ========================================================================
    // RESOLUTION
    // ========================================================================

    /// Check the mover's win, then a full board, then hand over the turn
    fn resolve(&mut self, mover: Player) -> Phase {
        if let Some(line) = self.board.check_line(mover) {
            self.phase = Phase::Won(mover, line);
            self.events.push(GameEvent::GameWon { player: mover, line });
            tracing::info!("Player {} wins after {} moves", mover.number(), self.history.len());
        } else if self.board.is_full() {
            self.phase = Phase::Draw;
            self.events.push(GameEvent::GameDrawn);
            tracing::info!("Game drawn");
        } else {
            self.current_player = mover.opponent();
            self.phase = Phase::AwaitingMove;
            self.events.push(GameEvent::TurnChanged(self.current_player));
        }

        self.phase
    }

    fn illegal(&self, operation: &'static str) -> MoveError {
        tracing::debug!("Rejected '{}' while {}", operation, self.phase.describe());
        MoveError::IllegalState {
            operation,
            phase: self.phase.describe(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
