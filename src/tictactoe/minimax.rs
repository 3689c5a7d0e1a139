//! Optimal play by exhaustive minimax search with alpha-beta pruning

use crate::tictactoe::board::{Action, Board, Player};
use crate::tictactoe::error::Result;

/// Game value of `board` under optimal play by both sides
///
/// 1 means X wins, -1 means O wins, 0 a draw.
///
/// # Errors
///
/// Returns an error only if the board offers an action it cannot apply
pub fn value(board: &Board) -> Result<i8> {
    search(board, -1, 1)
}

fn search(board: &Board, mut alpha: i8, mut beta: i8) -> Result<i8> {
    if board.terminal() {
        return Ok(board.utility());
    }

    let maximizing = board.player() == Player::X;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for action in board.actions() {
        let score = search(&board.result(action)?, alpha, beta)?;
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    Ok(best)
}

/// Best move for the player to move, `None` once the game is over
///
/// Ties go to the first action in row-major order.
///
/// # Errors
///
/// Returns an error only if the board offers an action it cannot apply
pub fn minimax(board: &Board) -> Result<Option<Action>> {
    if board.terminal() {
        return Ok(None);
    }

    let maximizing = board.player() == Player::X;
    let mut best: Option<(Action, i8)> = None;
    for action in board.actions() {
        let score = value(&board.result(action)?)?;
        let improves = best.is_none_or(|(_, best_score)| {
            if maximizing {
                score > best_score
            } else {
                score < best_score
            }
        });
        if improves {
            best = Some((action, score));
        }
    }
    Ok(best.map(|(action, _)| action))
}

/// Play both sides with [`minimax`] from `board` until the game ends
///
/// Returns every position reached, starting with `board`.
///
/// # Errors
///
/// Returns an error only if a chosen action cannot be applied
pub fn self_play(board: &Board) -> Result<Vec<Board>> {
    let mut positions = vec![*board];
    let mut current = *board;
    while let Some(action) = minimax(&current)? {
        current = current.result(action)?;
        positions.push(current);
    }
    Ok(positions)
}
