//! Knights-and-knaves puzzles solved by propositional model checking

/// Evaluation and model checking errors
pub mod error;
/// Sentences, models and entailment
pub mod logic;
/// Puzzle knowledge bases
pub mod puzzles;

pub use error::LogicError;
pub use logic::{Sentence, model_check};
pub use puzzles::{Character, Puzzle, puzzles};

/// Largest number of distinct symbols accepted by [`model_check`]
pub const MAX_SYMBOLS: usize = 20;
