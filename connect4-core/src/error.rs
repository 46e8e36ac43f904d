//! Move and state errors
//!
//! Every variant is recoverable: the operation that returned it left the
//! board and game state unchanged.

use crate::board::COLS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Column index outside the grid
    #[error("column {col} is out of range (expected 0..{})", COLS)]
    InvalidColumn { col: usize },

    /// Column has no empty cell left
    #[error("column {col} is full")]
    ColumnFull { col: usize },

    /// Operation not allowed in the current game phase
    #[error("cannot {operation} while {phase}")]
    IllegalState {
        operation: &'static str,
        phase: &'static str,
    },
}

impl MoveError {
    /// True for a rejected drop (bad or full column), as opposed to a
    /// command issued in the wrong phase
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            MoveError::InvalidColumn { .. } | MoveError::ColumnFull { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::InvalidColumn { col: 7 }.to_string(),
            "column 7 is out of range (expected 0..7)"
        );
        assert_eq!(
            MoveError::ColumnFull { col: 2 }.to_string(),
            "column 2 is full"
        );
        let err = MoveError::IllegalState {
            operation: "request a move",
            phase: "game is won",
        };
        assert_eq!(err.to_string(), "cannot request a move while game is won");
    }

    #[test]
    fn test_is_rejection() {
        assert!(MoveError::InvalidColumn { col: 9 }.is_rejection());
        assert!(MoveError::ColumnFull { col: 0 }.is_rejection());
        assert!(!MoveError::IllegalState {
            operation: "complete an animation",
            phase: "awaiting a move",
        }
        .is_rejection());
    }
}
