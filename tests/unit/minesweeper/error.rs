//! Tests for minesweeper error messages

#[cfg(test)]
mod tests {
    use pagerank::minesweeper::{Cell, MinesweeperError};

    // Tests messages name the cell and the board size
    // Verified by omitting the board size from the message
    #[test]
    fn test_messages() {
        let bounds = MinesweeperError::CellOutOfBounds {
            cell: Cell::new(9, 1),
            height: 8,
            width: 8,
        };
        let clue = MinesweeperError::InvalidClue {
            cell: Cell::new(0, 0),
            count: 4,
        };

        assert_eq!(bounds.to_string(), "Cell (9, 1) is outside the 8x8 board");
        assert_eq!(clue.to_string(), "Cell (0, 0) cannot border 4 mines");
        assert!(
            MinesweeperError::InferenceBound { rounds: 3 }
                .to_string()
                .contains("3 rounds")
        );
    }
}
