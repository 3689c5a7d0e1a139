//! Statements of the form "exactly `count` of these cells are mines"

use crate::minesweeper::board::Cell;
use std::collections::BTreeSet;
use std::fmt;

/// Set of cells together with how many of them are mines
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sentence {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Sentence {
    /// Exactly `count` of `cells` are mines
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    /// Cells the sentence speaks about
    pub const fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    /// Mines among the cells
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether the sentence no longer says anything
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells that must all be mines
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if !self.cells.is_empty() && self.cells.len() == self.count {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Cells that must all be safe
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Remove a cell known to be a mine, lowering the count
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count = self.count.saturating_sub(1);
        }
    }

    /// Remove a cell known to be safe
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Sentence about the cells of `self` outside `subset`
    ///
    /// Only defined when `subset` covers a non-empty proper subset of the
    /// cells and claims no more mines than `self`.
    pub fn difference(&self, subset: &Self) -> Option<Self> {
        let proper = !subset.cells.is_empty()
            && subset.cells.len() < self.cells.len()
            && subset.cells.is_subset(&self.cells);
        if !proper {
            return None;
        }

        let count = self.count.checked_sub(subset.count)?;
        Some(Self {
            cells: self.cells.difference(&subset.cells).copied().collect(),
            count,
        })
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}} = {}", cells.join(", "), self.count)
    }
}
