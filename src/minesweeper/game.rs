//! Headless games played by the knowledge base against a board

use crate::minesweeper::board::{Board, Cell};
use crate::minesweeper::error::Result;
use crate::minesweeper::knowledge::KnowledgeBase;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// How a game ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every safe cell was revealed and every mine deduced
    Won {
        /// Cells revealed
        moves: usize,
        /// Moves that were guesses rather than deductions
        guesses: usize,
    },
    /// A guess revealed a mine
    Lost {
        /// Cells revealed before the mine
        moves: usize,
        /// The mine that was hit
        mine: Cell,
    },
}

/// Let the knowledge base play `board` to the end
///
/// Known safe cells are revealed first; otherwise a seeded random guess is
/// made among the cells not known to be mines.
///
/// # Errors
///
/// Returns an error if deduction fails to settle after a reveal
pub fn autoplay(board: &Board, seed: u64) -> Result<Outcome> {
    let mut knowledge = KnowledgeBase::new(board.height(), board.width());
    let mut rng = StdRng::seed_from_u64(seed);
    let safe_cells = board.height() * board.width() - board.mines().len();
    let mut guesses = 0;

    while knowledge.moves_made().len() < safe_cells {
        let cell = if let Some(cell) = knowledge.make_safe_move() {
            cell
        } else if let Some(cell) = knowledge.make_random_move(&mut rng) {
            guesses += 1;
            cell
        } else {
            break;
        };

        if board.is_mine(cell) {
            info!(moves = knowledge.moves_made().len(), %cell, "hit a mine");
            return Ok(Outcome::Lost {
                moves: knowledge.moves_made().len(),
                mine: cell,
            });
        }

        let count = board.nearby_mines(cell)?;
        let rounds = knowledge.add_knowledge(cell, count)?;
        debug!(%cell, count, rounds, "revealed cell");
    }

    // Every cell still hidden once all safe cells are revealed is a mine
    let hidden: Vec<Cell> = board
        .cells()
        .filter(|cell| !knowledge.moves_made().contains(cell))
        .collect();
    for cell in hidden {
        knowledge.mark_mine(cell);
    }
    let moves = knowledge.moves_made().len();
    info!(moves, guesses, won = board.won(knowledge.mines()), "game finished");
    Ok(Outcome::Won { moves, guesses })
}
