//! Win and draw rules for the generalized board.

pub mod win;

pub use win::{winner, LINE_DIRECTIONS};

use crate::board::mark::Mark;
use crate::board::Board;

#[derive(Debug, PartialEq, Eq)]
pub enum GameEnding {
    Win(Mark),
    Draw,
}

/// Returns the game ending state if the game has ended, otherwise None.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if let Some(mark) = winner(board) {
        return Some(GameEnding::Win(mark));
    }
    if board.is_full() {
        return Some(GameEnding::Draw);
    }
    None
}

/// A draw is a board with no remaining moves and no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
