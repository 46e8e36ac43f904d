//! Board geometry, disc drops and line detection
//!
//! Row 0 is the top of the grid, row 5 the bottom. Discs always land on the
//! lowest empty cell of a column, so every column is a contiguous stack
//! growing upward from the bottom row.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Number of rows in the grid
pub const ROWS: usize = 6;

/// Number of columns in the grid
pub const COLS: usize = 7;

/// Discs needed in a row to win
pub const CONNECT: usize = 4;

/// Line directions as (d_row, d_col), in scan order:
/// horizontal, vertical, "/" diagonal, "\" diagonal
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal, left to right
    (1, 0),  // vertical, top to bottom
    (-1, 1), // "/" diagonal, bottom-left to top-right
    (1, 1),  // "\" diagonal, top-left to bottom-right
];

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number for display
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Contents of one grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Disc(player) => Some(player),
        }
    }
}

/// Grid coordinate (0-based, row 0 at the top)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position `n` steps away along `direction`.
    ///
    /// Callers keep the result on the grid; see `anchor_range`.
    fn step(self, (d_row, d_col): (isize, isize), n: usize) -> Self {
        let n = n as isize;
        Self::new(
            self.row.wrapping_add_signed(d_row * n),
            self.col.wrapping_add_signed(d_col * n),
        )
    }
}

/// Four aligned cells, ordered from the scan anchor along the line direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; CONNECT]);

impl WinningLine {
    fn from_anchor(anchor: Position, direction: (isize, isize)) -> Self {
        Self(std::array::from_fn(|i| anchor.step(direction, i)))
    }

    pub fn cells(&self) -> &[Position; CONNECT] {
        &self.0
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// 6x7 connect-four grid
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.grid = [[Cell::Empty; COLS]; ROWS];
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Cell at (row, col), `None` when off the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> + '_ {
        self.grid.iter()
    }

    /// Number of discs stacked in a column
    pub fn column_height(&self, col: usize) -> Result<usize, MoveError> {
        check_column(col)?;
        Ok(self.grid.iter().filter(|row| !row[col].is_empty()).count())
    }

    /// Total discs on the board
    pub fn disc_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Columns that can still take a disc, left to right
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&col| self.grid[0][col].is_empty())
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Whether `col` can take another disc
    pub fn is_column_open(&self, col: usize) -> Result<bool, MoveError> {
        check_column(col)?;
        Ok(self.grid[0][col].is_empty())
    }

    /// Drop a disc into `col` and return the row it landed on.
    ///
    /// A rejected drop leaves the board untouched.
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if !self.is_column_open(col)? {
            return Err(MoveError::ColumnFull { col });
        }

        // Scan upward from the bottom; the column is open so an empty cell exists
        for row in (0..ROWS).rev() {
            if self.grid[row][col].is_empty() {
                self.grid[row][col] = Cell::Disc(player);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull { col })
    }

    /// True once the top row is occupied everywhere
    pub fn is_full(&self) -> bool {
        self.grid[0].iter().all(|cell| !cell.is_empty())
    }

    // ========================================================================
    // LINE DETECTION
    // ========================================================================

    /// First run of four `player` discs, scanning each direction in
    /// `DIRECTIONS` order with anchors visited row-major
    pub fn check_line(&self, player: Player) -> Option<WinningLine> {
        DIRECTIONS
            .iter()
            .find_map(|&direction| self.sweep(player, direction))
    }

    fn sweep(&self, player: Player, direction: (isize, isize)) -> Option<WinningLine> {
        let target = Cell::Disc(player);
        let (d_row, d_col) = direction;

        for row in anchor_range(d_row, ROWS) {
            for col in anchor_range(d_col, COLS) {
                let line = WinningLine::from_anchor(Position::new(row, col), direction);
                if line.cells().iter().all(|p| self.grid[p.row][p.col] == target) {
                    return Some(line);
                }
            }
        }

        None
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn check_column(col: usize) -> Result<(), MoveError> {
    if col < COLS {
        Ok(())
    } else {
        Err(MoveError::InvalidColumn { col })
    }
}

/// Anchor indices along one axis such that `CONNECT` steps of `step`
/// stay inside `0..len`
fn anchor_range(step: isize, len: usize) -> Range<usize> {
    let reach = CONNECT - 1;
    match step.signum() {
        -1 => reach..len,
        1 => 0..len - reach,
        _ => 0..len,
    }
}

// ============================================================================
// TESTS
// ============================================================================
