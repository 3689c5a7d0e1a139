//! PageRank estimation over a corpus of linked pages
//!
//! A corpus is a directed graph of pages. Ranks are estimated two ways: by the
//! visit frequencies of a long random walk, and by iterating the PageRank
//! recurrence to its fixed point.
//!
//! Four smaller search and inference exercises live beside the engine and
//! share nothing with it: [`heredity`], [`knights`], [`minesweeper`] and
//! [`tictactoe`].

#![forbid(unsafe_code)]

/// Page set and link structure
pub mod graph;
/// Exact gene and trait inference over a family pedigree
pub mod heredity;
/// Input/output operations and error handling
pub mod io;
/// Knights-and-knaves puzzles solved by propositional model checking
pub mod knights;
/// Minesweeper board and a deducing player
pub mod minesweeper;
/// Transition model and rank estimators
pub mod rank;
/// Tic-tac-toe with an optimal minimax player
pub mod tictactoe;

pub use graph::Corpus;
pub use io::error::{RankError, Result};
pub use rank::{RankConfig, RankDistribution};
