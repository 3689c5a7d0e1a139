//! Error types for boards and the deducing player

use crate::minesweeper::board::Cell;
use std::fmt;

/// Errors raised by the board and the knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinesweeperError {
    /// Cell lies outside the board
    CellOutOfBounds {
        /// Offending cell
        cell: Cell,
        /// Board height
        height: usize,
        /// Board width
        width: usize,
    },

    /// More mines requested than the board has cells
    InvalidMineCount {
        /// Requested mines
        mines: usize,
        /// Cells on the board
        cells: usize,
    },

    /// Reported neighbour count cannot be right for the cell
    InvalidClue {
        /// Revealed cell
        cell: Cell,
        /// Reported mine count
        count: usize,
    },

    /// Inference did not settle within its round limit
    InferenceBound {
        /// Rounds performed
        rounds: usize,
    },
}

impl fmt::Display for MinesweeperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds {
                cell,
                height,
                width,
            } => write!(f, "Cell {cell} is outside the {height}x{width} board"),
            Self::InvalidMineCount { mines, cells } => {
                write!(f, "Cannot place {mines} mines on {cells} cells")
            }
            Self::InvalidClue { cell, count } => {
                write!(f, "Cell {cell} cannot border {count} mines")
            }
            Self::InferenceBound { rounds } => {
                write!(f, "Inference did not settle after {rounds} rounds")
            }
        }
    }
}

impl std::error::Error for MinesweeperError {}

/// Convenience type alias for minesweeper results
pub type Result<T> = std::result::Result<T, MinesweeperError>;
