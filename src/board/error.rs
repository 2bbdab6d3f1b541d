use thiserror::Error;

use super::coord::Coord;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("board dimensions must all be at least 1, got {width}x{height}x{depth}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        depth: usize,
    },
    #[error("win length {win_length} does not fit on a {width}x{height}x{depth} board")]
    InvalidWinLength {
        win_length: usize,
        width: usize,
        height: usize,
        depth: usize,
    },
    #[error("coordinate {coord} is outside the board")]
    OutOfBounds { coord: Coord },
    #[error("cell {coord} is already occupied")]
    CellOccupied { coord: Coord },
    #[error("invalid board notation: {msg}")]
    InvalidNotation { msg: &'static str },
}
