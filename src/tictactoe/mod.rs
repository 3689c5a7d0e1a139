//! Tic-tac-toe with a player that never loses

/// Board, players and moves
pub mod board;
/// Move and parsing errors
pub mod error;
/// Optimal move search
pub mod minimax;

pub use board::{Action, Board, Player};
pub use error::GameError;
pub use minimax::minimax;
