pub mod coord;
pub mod error;
pub mod mark;

mod display;

use coord::Coord;
use error::BoardError;
use mark::Mark;

/// Represents the state of a game board: a `width x height x depth` grid of
/// cells plus the win length. Dimensions and win length are fixed for the
/// lifetime of the board; cells are mutated through `put` (validated) or
/// `place`/`clear_cell` (raw, used by the search to mutate and restore in
/// place without going through undo history).
///
/// Cells are stored in a flat vector indexed layer by layer: `z` outermost,
/// then `y`, then `x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    depth: usize,
    win_length: usize,
    cells: Vec<Option<Mark>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            depth: 3,
            win_length: 3,
            cells: vec![None; 27],
        }
    }
}

impl Board {
    /// Creates an empty board. Rejects degenerate configurations up front:
    /// every dimension must be at least 1, and `win_length` must fit along
    /// the longest axis.
    pub fn new(
        width: usize,
        height: usize,
        depth: usize,
        win_length: usize,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(BoardError::InvalidDimensions {
                width,
                height,
                depth,
            });
        }

        let longest_axis = width.max(height).max(depth);
        if win_length == 0 || win_length > longest_axis {
            return Err(BoardError::InvalidWinLength {
                win_length,
                width,
                height,
                depth,
            });
        }

        Ok(Self {
            width,
            height,
            depth,
            win_length,
            cells: vec![None; width * height * depth],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the signed coordinate lies on the board. Signed so that
    /// line-walking code can step off the edge and simply check.
    pub fn contains(&self, x: isize, y: isize, z: isize) -> bool {
        x >= 0
            && (x as usize) < self.width
            && y >= 0
            && (y as usize) < self.height
            && z >= 0
            && (z as usize) < self.depth
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height && coord.z < self.depth
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.z * self.height + coord.y) * self.width + coord.x
    }

    /// The mark occupying the cell, or `None` for an empty or out-of-bounds
    /// coordinate.
    pub fn mark_at(&self, coord: Coord) -> Option<Mark> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.cells[self.index(coord)]
    }

    pub fn is_valid_move(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.cells[self.index(coord)].is_none()
    }

    /// Writes a mark after validating bounds and vacancy.
    pub fn put(&mut self, coord: Coord, mark: Mark) -> Result<(), BoardError> {
        if !self.in_bounds(coord) {
            return Err(BoardError::OutOfBounds { coord });
        }
        if self.cells[self.index(coord)].is_some() {
            return Err(BoardError::CellOccupied { coord });
        }
        self.place(coord, mark);
        Ok(())
    }

    /// Writes a mark directly, without validation or history. The search
    /// pairs this with `clear_cell` to explore and restore positions.
    pub fn place(&mut self, coord: Coord, mark: Mark) {
        let index = self.index(coord);
        self.cells[index] = Some(mark);
    }

    pub fn clear_cell(&mut self, coord: Coord) {
        let index = self.index(coord);
        self.cells[index] = None;
    }

    /// All empty cells in canonical order: `z` outermost, then `y`, then
    /// `x`, ascending. Order-sensitive callers (first winning or blocking
    /// move, root tie-breaking) rely on exactly this order.
    pub fn valid_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::with_capacity(self.cells.len());
        for z in 0..self.depth {
            for y in 0..self.height {
                for x in 0..self.width {
                    let coord = Coord::new(x, y, z);
                    if self.cells[self.index(coord)].is_none() {
                        moves.push(coord);
                    }
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Parses layer notation: one string per `z` layer, rows separated by
    /// `/`, cells `X`, `O` or `.`. Rows run top to bottom in `y`, cells left
    /// to right in `x`. Example 2x2x2 board: `["XO/..", "../.O"]`.
    pub fn from_layers(win_length: usize, layers: &[&str]) -> Result<Self, BoardError> {
        if layers.is_empty() {
            return Err(BoardError::InvalidNotation {
                msg: "expected at least one layer",
            });
        }

        let rows: Vec<Vec<&str>> = layers
            .iter()
            .map(|layer| layer.split('/').collect())
            .collect();
        let height = rows[0].len();
        let width = rows[0][0].chars().count();

        if rows.iter().any(|layer| layer.len() != height) {
            return Err(BoardError::InvalidNotation {
                msg: "layers must all have the same number of rows",
            });
        }
        if rows
            .iter()
            .any(|layer| layer.iter().any(|row| row.chars().count() != width))
        {
            return Err(BoardError::InvalidNotation {
                msg: "rows must all have the same number of cells",
            });
        }

        let mut board = Board::new(width, height, layers.len(), win_length)?;
        for (z, layer) in rows.iter().enumerate() {
            for (y, row) in layer.iter().enumerate() {
                for (x, c) in row.chars().enumerate() {
                    match c {
                        '.' => (),
                        _ => match Mark::from_char(c) {
                            Some(mark) => board.place(Coord::new(x, y, z), mark),
                            None => {
                                return Err(BoardError::InvalidNotation {
                                    msg: "cells must be one of `X`, `O`, `.`",
                                })
                            }
                        },
                    }
                }
            }
        }
        Ok(board)
    }

    /// The inverse of `from_layers`: layers joined with a single space.
    pub fn to_layers(&self) -> String {
        let mut layers = Vec::with_capacity(self.depth);
        for z in 0..self.depth {
            let mut rows = Vec::with_capacity(self.height);
            for y in 0..self.height {
                let row: String = (0..self.width)
                    .map(|x| match self.mark_at(Coord::new(x, y, z)) {
                        Some(mark) => mark.to_char(),
                        None => '.',
                    })
                    .collect();
                rows.push(row);
            }
            layers.push(rows.join("/"));
        }
        layers.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimension() {
        assert!(matches!(
            Board::new(0, 3, 3, 3),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Board::new(3, 3, 0, 3),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_unreachable_win_length() {
        assert!(matches!(
            Board::new(3, 3, 3, 4),
            Err(BoardError::InvalidWinLength { .. })
        ));
        assert!(matches!(
            Board::new(3, 3, 3, 0),
            Err(BoardError::InvalidWinLength { .. })
        ));
        // The longest axis is what matters, not the shortest.
        assert!(Board::new(5, 1, 1, 5).is_ok());
    }

    #[test]
    fn test_put_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new(3, 3, 3, 3).unwrap();
        board.put(Coord::new(1, 1, 1), Mark::X).unwrap();
        assert!(matches!(
            board.put(Coord::new(1, 1, 1), Mark::O),
            Err(BoardError::CellOccupied { .. })
        ));
        assert!(matches!(
            board.put(Coord::new(3, 0, 0), Mark::O),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_valid_moves_canonical_order() {
        let board = Board::new(2, 2, 2, 2).unwrap();
        let moves = board.valid_moves();
        let expected: Vec<Coord> = vec![
            Coord::new(0, 0, 0),
            Coord::new(1, 0, 0),
            Coord::new(0, 1, 0),
            Coord::new(1, 1, 0),
            Coord::new(0, 0, 1),
            Coord::new(1, 0, 1),
            Coord::new(0, 1, 1),
            Coord::new(1, 1, 1),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_valid_moves_plus_occupied_is_total() {
        let mut board = Board::new(3, 4, 2, 3).unwrap();
        board.put(Coord::new(0, 0, 0), Mark::X).unwrap();
        board.put(Coord::new(2, 3, 1), Mark::O).unwrap();
        board.put(Coord::new(1, 1, 1), Mark::X).unwrap();

        let occupied = (0..board.depth())
            .flat_map(|z| (0..board.height()).map(move |y| (y, z)))
            .flat_map(|(y, z)| (0..board.width()).map(move |x| Coord::new(x, y, z)))
            .filter(|&coord| board.mark_at(coord).is_some())
            .count();
        assert_eq!(board.valid_moves().len() + occupied, board.total_cells());
    }

    #[test]
    fn test_place_and_clear_round_trip() {
        let mut board = Board::new(3, 3, 3, 3).unwrap();
        let pristine = board.clone();
        let coord = Coord::new(2, 0, 1);

        board.place(coord, Mark::O);
        assert_eq!(board.mark_at(coord), Some(Mark::O));
        board.clear_cell(coord);
        assert!(board == pristine);
    }

    #[test]
    fn test_layer_notation_round_trip() {
        let board = Board::from_layers(3, &["XX./OO./...", ".../.X./...", "O../.../..X"]).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.depth(), 3);
        assert_eq!(board.mark_at(Coord::new(1, 0, 0)), Some(Mark::X));
        assert_eq!(board.mark_at(Coord::new(0, 0, 2)), Some(Mark::O));
        assert_eq!(
            board.to_layers(),
            "XX./OO./... .../.X./... O../.../..X"
        );
    }

    #[test]
    fn test_layer_notation_rejects_ragged_input() {
        assert!(matches!(
            Board::from_layers(2, &["XO/..", "XO"]),
            Err(BoardError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Board::from_layers(2, &["X?/.."]),
            Err(BoardError::InvalidNotation { .. })
        ));
    }
}
