//! Tests for board construction and neighbour counts

#[cfg(test)]
mod tests {
    use pagerank::minesweeper::board::neighbors;
    use pagerank::minesweeper::{Board, Cell, MinesweeperError};
    use std::collections::BTreeSet;

    // Tests neighbour counts in the middle, on an edge and in a corner
    // Verified by counting the cell itself
    #[test]
    fn test_nearby_mines() {
        let board = Board::new(3, 3, [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]).unwrap();

        assert_eq!(board.nearby_mines(Cell::new(1, 1)).unwrap(), 2);
        assert_eq!(board.nearby_mines(Cell::new(0, 1)).unwrap(), 2);
        assert_eq!(board.nearby_mines(Cell::new(0, 2)).unwrap(), 1);
        assert_eq!(board.nearby_mines(Cell::new(2, 0)).unwrap(), 1);
        assert!(board.is_mine(Cell::new(1, 1)));
    }

    // Tests neighbours stay on the board
    // Verified by removing the upper bound on rows
    #[test]
    fn test_neighbors_clipped() {
        let corner: Vec<Cell> = neighbors(Cell::new(0, 0), 2, 3).collect();
        let edge: BTreeSet<Cell> = neighbors(Cell::new(1, 2), 2, 3).collect();

        assert_eq!(corner, [Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
        assert_eq!(
            edge,
            BTreeSet::from([Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 1)])
        );
    }

    // Tests cells off the board are rejected
    // Verified by treating off-board cells as empty
    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(2, 2, std::iter::empty()).unwrap();

        assert!(matches!(
            board.nearby_mines(Cell::new(2, 0)),
            Err(MinesweeperError::CellOutOfBounds { .. })
        ));
        assert!(Board::new(2, 2, [Cell::new(0, 5)]).is_err());
        assert!(!board.contains(Cell::new(0, 2)));
    }

    // Tests random boards place distinct mines reproducibly
    // Verified by sampling mine cells with replacement
    #[test]
    fn test_random_board() {
        let first = Board::random(8, 8, 8, 11).unwrap();
        let second = Board::random(8, 8, 8, 11).unwrap();

        assert_eq!(first.mines().len(), 8);
        assert_eq!(first, second);
        assert!(first.mines().iter().all(|cell| first.contains(*cell)));
        assert!(matches!(
            Board::random(2, 2, 5, 0),
            Err(MinesweeperError::InvalidMineCount { mines: 5, cells: 4 })
        ));
    }

    // Tests the win check and the text rendering
    // Verified by accepting a superset of the mines as a win
    #[test]
    fn test_won_and_display() {
        let board = Board::new(1, 2, [Cell::new(0, 1)]).unwrap();

        assert!(board.won(&BTreeSet::from([Cell::new(0, 1)])));
        assert!(!board.won(&BTreeSet::from([Cell::new(0, 0), Cell::new(0, 1)])));
        assert_eq!(board.to_string(), "-----\n| |X|\n-----\n");
        assert_eq!(board.cells().count(), 2);
    }
}
