//! Error types for tic-tac-toe boards

use std::fmt;

/// Errors raised when applying moves or parsing boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move targets a cell that is taken or off the board, or the game is over
    InvalidMove {
        /// Target row
        row: usize,
        /// Target column
        column: usize,
        /// Why the move is not allowed
        reason: &'static str,
    },

    /// Text does not describe a reachable board
    InvalidBoard {
        /// Description of the problem
        reason: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove {
                row,
                column,
                reason,
            } => write!(f, "Invalid move ({row}, {column}): {reason}"),
            Self::InvalidBoard { reason } => write!(f, "Invalid board: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience type alias for tic-tac-toe results
pub type Result<T> = std::result::Result<T, GameError>;
