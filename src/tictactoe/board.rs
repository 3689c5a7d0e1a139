//! Three-by-three board, turn order and game end

use crate::tictactoe::error::{GameError, Result};
use std::fmt;
use std::str::FromStr;

/// Side length of the board
pub const SIZE: usize = 3;

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, maximizes utility
    X,
    /// Moves second, minimizes utility
    O,
}

impl Player {
    /// The other player
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Cell chosen for a move
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Action {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub column: usize,
}

impl Action {
    /// Move at `row`, `column`
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Board position; X always moves first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    /// Empty starting board
    pub const fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Mark at `row`, `column`, `None` when empty or off the board
    pub fn get(&self, row: usize, column: usize) -> Option<Player> {
        self.cells.get(row).and_then(|cells| cells.get(column)).copied().flatten()
    }

    fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    /// Player who moves next
    pub fn player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Empty cells in row-major order
    pub fn actions(&self) -> Vec<Action> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |column| Action::new(row, column)))
            .filter(|action| self.get(action.row, action.column).is_none())
            .collect()
    }

    /// Board after the next player marks `action`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the cell is off the board or
    /// taken, or the game is already over
    pub fn result(&self, action: Action) -> Result<Self> {
        let invalid = |reason| GameError::InvalidMove {
            row: action.row,
            column: action.column,
            reason,
        };
        if self.terminal() {
            return Err(invalid("the game is over"));
        }

        let player = self.player();
        let mut next = *self;
        let cell = next
            .cells
            .get_mut(action.row)
            .and_then(|cells| cells.get_mut(action.column))
            .ok_or_else(|| invalid("outside the board"))?;
        if cell.is_some() {
            return Err(invalid("cell is taken"));
        }
        *cell = Some(player);
        Ok(next)
    }

    /// Player holding a full row, column or diagonal
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [first, second, third] = line.map(|(row, column)| self.get(row, column));
            first.filter(|_| first == second && second == third)
        })
    }

    /// Whether the game has a winner or no empty cell is left
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().flatten().all(Option::is_some)
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parse three rows of `X`, `O` or `.` separated by `/`, e.g. `X.O/.X./..O`
    fn from_str(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.split('/').collect();
        if rows.len() != SIZE {
            return Err(GameError::InvalidBoard {
                reason: format!("expected {SIZE} rows, found {}", rows.len()),
            });
        }

        let mut board = Self::new();
        for (cells, row) in board.cells.iter_mut().zip(&rows) {
            let marks: Vec<char> = row.chars().collect();
            if marks.len() != SIZE {
                return Err(GameError::InvalidBoard {
                    reason: format!("row '{row}' must have {SIZE} cells"),
                });
            }
            for (cell, mark) in cells.iter_mut().zip(marks) {
                *cell = match mark {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    '.' => None,
                    other => {
                        return Err(GameError::InvalidBoard {
                            reason: format!("unexpected mark '{other}'"),
                        });
                    }
                };
            }
        }

        let (x, o) = (board.count(Player::X), board.count(Player::O));
        if x != o && x != o + 1 {
            return Err(GameError::InvalidBoard {
                reason: format!("{x} X marks and {o} O marks cannot alternate"),
            });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('.', Player::symbol))?;
            }
        }
        Ok(())
    }
}
