//! Text rendering of the board, drop-animation frames and result messages
//!
//! Columns are shown 1-based; the core addresses them from 0.

use std::fmt::Write;

use connect4_core::{Board, Cell, GameConfig, MoveError, PendingDrop, Phase, COLS};

/// Board as text, top row first, followed by the 1-based column numbers
pub fn render_board(board: &Board, config: &GameConfig) -> String {
    render_with(board, config, |_, _, cell| cell)
}

/// Board with the pending disc drawn at `falling_row` instead of its
/// landing cell
pub fn render_frame(
    board: &Board,
    config: &GameConfig,
    drop: &PendingDrop,
    falling_row: usize,
) -> String {
    render_with(board, config, |row, col, cell| {
        if col != drop.col {
            cell
        } else if row == falling_row {
            Cell::Disc(drop.player)
        } else if row == drop.row {
            Cell::Empty
        } else {
            cell
        }
    })
}

/// Rows the falling disc passes through, ending on its landing row
pub fn drop_path(drop: &PendingDrop) -> impl Iterator<Item = usize> {
    0..=drop.row
}

fn render_with<F>(board: &Board, config: &GameConfig, mut cell_at: F) -> String
where
    F: FnMut(usize, usize, Cell) -> Cell,
{
    let mut out = String::new();
    for (row, cells) in board.rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let _ = write!(out, "{} ", config.cell_symbol(cell_at(row, col, cell)));
        }
        out.push('\n');
    }
    for col in 0..COLS {
        let _ = write!(out, "{} ", col + 1);
    }
    out.push('\n');
    out
}

/// Message for a finished game, `None` while play continues
pub fn result_message(phase: &Phase, config: &GameConfig) -> Option<String> {
    match phase {
        Phase::Won(player, line) => {
            let cells: Vec<String> = line
                .cells()
                .iter()
                .map(|p| format!("(row {}, column {})", p.row + 1, p.col + 1))
                .collect();
            Some(format!(
                "Player {} ({}) wins! Line: {}",
                player.number(),
                config.player_symbol(*player),
                cells.join(" ")
            ))
        }
        Phase::Draw => Some("It's a draw!".to_string()),
        Phase::AwaitingMove | Phase::Animating(_) => None,
    }
}

/// Human-facing text for a rejected command, using 1-based columns
pub fn describe_error(err: &MoveError) -> String {
    match err {
        MoveError::InvalidColumn { .. } => format!("Column must be between 1 and {}", COLS),
        MoveError::ColumnFull { col } => format!("Column {} is full", col + 1),
        MoveError::IllegalState { .. } => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect4_core::{GameController, Player};

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::new(), &GameConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], ". . . . . . . ");
        assert_eq!(lines[6], "1 2 3 4 5 6 7 ");
    }

    #[test]
    fn test_render_discs() {
        let mut game = GameController::new();
        game.request_move(0).unwrap();
        game.request_move(0).unwrap();
        let text = render_board(game.board(), &GameConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "O . . . . . . ");
        assert_eq!(lines[5], "X . . . . . . ");
    }

    #[test]
    fn test_frames_move_disc_down() {
        let mut game = GameController::new();
        game.set_animation(true);
        let Phase::Animating(drop) = game.request_move(2).unwrap() else {
            panic!("expected an animating phase");
        };
        let config = GameConfig::default();

        let rows: Vec<usize> = drop_path(&drop).collect();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);

        let first = render_frame(game.board(), &config, &drop, 0);
        let lines: Vec<&str> = first.lines().collect();
        assert_eq!(lines[0], ". . X . . . . ");
        assert_eq!(lines[5], ". . . . . . . ");

        let last = render_frame(game.board(), &config, &drop, drop.row);
        assert_eq!(last, render_board(game.board(), &config));
    }

    #[test]
    fn test_result_messages() {
        let config = GameConfig::default();
        let mut game = GameController::new();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.request_move(col).unwrap();
        }
        let msg = result_message(&game.phase(), &config).unwrap();
        assert!(msg.starts_with("Player 1 (X) wins!"));
        assert!(msg.contains("(row 3, column 1)"));

        assert_eq!(result_message(&Phase::Draw, &config).as_deref(), Some("It's a draw!"));
        assert_eq!(result_message(&Phase::AwaitingMove, &config), None);
        assert_eq!(config.player_symbol(Player::Two), 'O');
    }

    #[test]
    fn test_describe_error_is_one_based() {
        assert_eq!(
            describe_error(&MoveError::ColumnFull { col: 0 }),
            "Column 1 is full"
        );
        assert_eq!(
            describe_error(&MoveError::InvalidColumn { col: 7 }),
            "Column must be between 1 and 7"
        );
    }
}
