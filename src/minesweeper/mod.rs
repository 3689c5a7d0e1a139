//! Minesweeper board and a player that deduces mines from revealed counts
//!
//! Every revealed cell adds a [`sentence::Sentence`] to the player's
//! [`knowledge::KnowledgeBase`]. Sentences are simplified against known
//! cells and against each other until no new fact follows.

/// Cells, boards and neighbour counts
pub mod board;
/// Board and inference errors
pub mod error;
/// Automatic play against a board
pub mod game;
/// Deduction over accumulated sentences
pub mod knowledge;
/// Mine-count statements about sets of cells
pub mod sentence;

pub use board::{Board, Cell};
pub use error::MinesweeperError;
pub use knowledge::KnowledgeBase;
pub use sentence::Sentence;

/// Default limit on inference rounds after a single reveal
pub const DEFAULT_INFERENCE_ROUNDS: usize = 1_000;
