//! Tests for tic-tac-toe error messages

#[cfg(test)]
mod tests {
    use pagerank::tictactoe::GameError;

    // Tests move errors name the cell and the reason
    // Verified by omitting the column from the message
    #[test]
    fn test_messages() {
        let invalid_move = GameError::InvalidMove {
            row: 1,
            column: 2,
            reason: "cell is taken",
        };
        let invalid_board = GameError::InvalidBoard {
            reason: "expected 3 rows, found 1".to_string(),
        };

        assert_eq!(invalid_move.to_string(), "Invalid move (1, 2): cell is taken");
        assert_eq!(invalid_board.to_string(), "Invalid board: expected 3 rows, found 1");
    }
}
