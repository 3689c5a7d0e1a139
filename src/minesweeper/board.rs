//! Board with hidden mines

use crate::minesweeper::error::{MinesweeperError, Result};
use rand::{SeedableRng, rngs::StdRng, seq::index};
use std::collections::BTreeSet;
use std::fmt;

/// Board position as (row, column)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub column: usize,
}

impl Cell {
    /// Cell at `row`, `column`
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Every in-bounds cell within one row and column of `cell`, excluding itself
pub fn neighbors(cell: Cell, height: usize, width: usize) -> impl Iterator<Item = Cell> {
    let rows = cell.row.saturating_sub(1)..=(cell.row + 1).min(height.saturating_sub(1));
    let columns = cell.column.saturating_sub(1)..=(cell.column + 1).min(width.saturating_sub(1));

    rows.flat_map(move |row| columns.clone().map(move |column| Cell::new(row, column)))
        .filter(move |&candidate| {
            candidate != cell && candidate.row < height && candidate.column < width
        })
}

/// Grid of `height` by `width` cells, some of which hold mines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    mines: BTreeSet<Cell>,
}

impl Board {
    /// Board with mines at exactly `mines`
    ///
    /// # Errors
    ///
    /// Returns [`MinesweeperError::CellOutOfBounds`] for a mine off the board
    pub fn new(height: usize, width: usize, mines: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let board = Self {
            height,
            width,
            mines: BTreeSet::new(),
        };
        let mines = mines
            .into_iter()
            .map(|cell| board.check(cell).map(|()| cell))
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self { mines, ..board })
    }

    /// Board with `mine_count` mines at distinct seeded random cells
    ///
    /// # Errors
    ///
    /// Returns [`MinesweeperError::InvalidMineCount`] if the mines do not fit
    pub fn random(height: usize, width: usize, mine_count: usize, seed: u64) -> Result<Self> {
        let cells = height * width;
        if mine_count > cells {
            return Err(MinesweeperError::InvalidMineCount {
                mines: mine_count,
                cells,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mines = index::sample(&mut rng, cells, mine_count)
            .into_iter()
            .map(|position| Cell::new(position / width, position % width))
            .collect();

        Ok(Self {
            height,
            width,
            mines,
        })
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Cells holding a mine
    pub const fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    /// Whether `cell` lies on the board
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.column < self.width
    }

    /// Reject cells outside the board
    ///
    /// # Errors
    ///
    /// Returns [`MinesweeperError::CellOutOfBounds`] naming the cell
    pub const fn check(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MinesweeperError::CellOutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Whether `cell` holds a mine
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Mines among the neighbours of `cell`
    ///
    /// # Errors
    ///
    /// Returns [`MinesweeperError::CellOutOfBounds`] for a cell off the board
    pub fn nearby_mines(&self, cell: Cell) -> Result<usize> {
        self.check(cell)?;
        Ok(neighbors(cell, self.height, self.width)
            .filter(|neighbor| self.is_mine(*neighbor))
            .count())
    }

    /// Whether `flagged` is exactly the set of mines
    pub fn won(&self, flagged: &BTreeSet<Cell>) -> bool {
        *flagged == self.mines
    }

    /// Every cell of the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |column| Cell::new(row, column)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "--".repeat(self.width) + "-";
        for row in 0..self.height {
            writeln!(f, "{separator}")?;
            for column in 0..self.width {
                let mark = if self.is_mine(Cell::new(row, column)) { 'X' } else { ' ' };
                write!(f, "|{mark}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{separator}")
    }
}
