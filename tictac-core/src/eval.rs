//! Terminal position scoring
//!
//! Scores are always from X's point of view: X maximizes, O minimizes.
//! Unfinished games are never scored heuristically; search runs to the end.

use crate::game::{Board, Outcome};

/// Score of a game X has won
pub const WIN_VALUE: i32 = 1;

/// Score of a game O has won
pub const LOSS_VALUE: i32 = -1;

/// Score of a drawn game
pub const DRAW_VALUE: i32 = 0;

/// Score for a verdict, `None` while the game is still open
pub fn outcome_value(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::XWins => Some(WIN_VALUE),
        Outcome::OWins => Some(LOSS_VALUE),
        Outcome::Draw => Some(DRAW_VALUE),
        Outcome::Undetermined => None,
    }
}

/// Score a finished board.
///
/// # Panics
///
/// Panics if the board is not terminal. Scoring an open position is a
/// caller bug, not a recoverable condition.
pub fn utility(board: &Board) -> i32 {
    match outcome_value(board.outcome()) {
        Some(value) => value,
        None => panic!("utility called on non-terminal board {board}"),
    }
}
