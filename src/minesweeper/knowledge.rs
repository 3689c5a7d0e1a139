//! Knowledge base that deduces safe cells and mines from revealed counts

use crate::minesweeper::DEFAULT_INFERENCE_ROUNDS;
use crate::minesweeper::board::{Cell, neighbors};
use crate::minesweeper::error::{MinesweeperError, Result};
use crate::minesweeper::sentence::Sentence;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::BTreeSet;
use tracing::debug;

/// Player state: moves made, cells known safe or mined, and open sentences
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    height: usize,
    width: usize,
    moves_made: BTreeSet<Cell>,
    mines: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
    sentences: Vec<Sentence>,
    max_rounds: usize,
}

impl KnowledgeBase {
    /// Empty knowledge of a `height` by `width` board
    pub const fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            moves_made: BTreeSet::new(),
            mines: BTreeSet::new(),
            safes: BTreeSet::new(),
            sentences: Vec::new(),
            max_rounds: DEFAULT_INFERENCE_ROUNDS,
        }
    }

    /// Limit the inference rounds run by each [`KnowledgeBase::add_knowledge`]
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Cells already revealed
    pub const fn moves_made(&self) -> &BTreeSet<Cell> {
        &self.moves_made
    }

    /// Cells known to hold a mine
    pub const fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    /// Cells known to be safe
    pub const fn safes(&self) -> &BTreeSet<Cell> {
        &self.safes
    }

    /// Sentences not yet fully resolved
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Record a cell as a mine everywhere
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell);
        }
    }

    /// Record a cell as safe everywhere
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell);
        }
    }

    /// Learn that the revealed safe `cell` borders `count` mines, then deduce
    /// until nothing new follows
    ///
    /// Returns the number of inference rounds run.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell` is off the board, `count` exceeds its
    /// neighbours, or deduction does not settle within the round limit
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<usize> {
        if cell.row >= self.height || cell.column >= self.width {
            return Err(MinesweeperError::CellOutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }

        let mut unknown = BTreeSet::new();
        let mut known_mines = 0;
        for neighbor in neighbors(cell, self.height, self.width) {
            if self.mines.contains(&neighbor) {
                known_mines += 1;
            } else if !self.safes.contains(&neighbor) && !self.moves_made.contains(&neighbor) {
                unknown.insert(neighbor);
            }
        }
        let remaining = count
            .checked_sub(known_mines)
            .filter(|remaining| *remaining <= unknown.len())
            .ok_or(MinesweeperError::InvalidClue { cell, count })?;

        self.moves_made.insert(cell);
        self.mark_safe(cell);
        self.sentences.push(Sentence::new(unknown, remaining));

        self.infer()
    }

    /// Alternate marking known cells and combining sentences until neither changes anything
    fn infer(&mut self) -> Result<usize> {
        for round in 1..=self.max_rounds {
            self.mark_known_cells();
            self.sentences.retain(|sentence| !sentence.is_empty());

            let derived = self.derive_sentences();
            debug!(round, derived, sentences = self.sentences.len(), "inference round");
            if derived == 0 {
                return Ok(round);
            }
        }

        Err(MinesweeperError::InferenceBound {
            rounds: self.max_rounds,
        })
    }

    fn mark_known_cells(&mut self) {
        loop {
            let mut mines = BTreeSet::new();
            let mut safes = BTreeSet::new();
            for sentence in &self.sentences {
                mines.extend(sentence.known_mines());
                safes.extend(sentence.known_safes());
            }
            if mines.is_empty() && safes.is_empty() {
                return;
            }

            for cell in mines {
                self.mark_mine(cell);
            }
            for cell in safes {
                self.mark_safe(cell);
            }
        }
    }

    /// Add every subset difference not already known, returning how many were added
    fn derive_sentences(&mut self) -> usize {
        let mut derived = Vec::new();
        for superset in &self.sentences {
            for subset in &self.sentences {
                if let Some(sentence) = superset.difference(subset)
                    && !self.sentences.contains(&sentence)
                    && !derived.contains(&sentence)
                {
                    derived.push(sentence);
                }
            }
        }

        let added = derived.len();
        self.sentences.extend(derived);
        added
    }

    /// Known safe cell not yet revealed, smallest first
    pub fn make_safe_move(&self) -> Option<Cell> {
        self.safes.difference(&self.moves_made).next().copied()
    }

    /// Random unrevealed cell not known to be a mine
    pub fn make_random_move(&self, rng: &mut impl Rng) -> Option<Cell> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |column| Cell::new(row, column)))
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .choose(rng)
    }
}
