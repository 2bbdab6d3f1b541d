use crate::board::coord::Coord;
use crate::board::mark::Mark;
use crate::board::Board;

/// The 13 direction classes covering every axis-aligned, planar-diagonal and
/// space-diagonal line in 3D. Antiparallel counterparts are omitted: the scan
/// starts from every cell, so a line found walking `(-1,0,0)` from one end is
/// found walking `(1,0,0)` from the other.
pub const LINE_DIRECTIONS: [(isize, isize, isize); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 1, 0),
    (1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (-1, 1, 1),
];

/// Scans every occupied cell as a potential line start and walks each
/// direction for `win_length` steps. Returns the first completed line's
/// mark, or None. Cost is O(cells * 13 * win_length), which is the dominant
/// term inside the search since it runs at every node.
pub fn winner(board: &Board) -> Option<Mark> {
    for z in 0..board.depth() {
        for y in 0..board.height() {
            for x in 0..board.width() {
                let mark = match board.mark_at(Coord::new(x, y, z)) {
                    Some(mark) => mark,
                    None => continue,
                };
                for &(dx, dy, dz) in LINE_DIRECTIONS.iter() {
                    if line_completed(board, mark, (x, y, z), (dx, dy, dz)) {
                        return Some(mark);
                    }
                }
            }
        }
    }
    None
}

fn line_completed(
    board: &Board,
    mark: Mark,
    (x, y, z): (usize, usize, usize),
    (dx, dy, dz): (isize, isize, isize),
) -> bool {
    for step in 1..board.win_length() as isize {
        let cx = x as isize + step * dx;
        let cy = y as isize + step * dy;
        let cz = z as isize + step * dz;
        if !board.contains(cx, cy, cz) {
            return false;
        }
        if board.mark_at(Coord::new(cx as usize, cy as usize, cz as usize)) != Some(mark) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_win() {
        let board = Board::from_layers(3, &["XXX/.../...", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_layers(3, &["O../O../O..", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_pillar_win_across_layers() {
        let board = Board::from_layers(3, &[".X./.../...", ".X./.../...", ".X./.../..."]).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_planar_diagonal_win() {
        let board = Board::from_layers(3, &["O../.O./..O", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_layers(3, &["..X/.X./X..", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_space_diagonal_win() {
        let board = Board::from_layers(3, &["X../.../...", ".../.X./...", ".../.../..X"]).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_rising_anti_diagonal_win() {
        // The (-1, 1, 1) class: x falls while y and z rise.
        let board = Board::from_layers(3, &["..O/.../...", ".../.O./...", ".../.../O.."]).unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_on_broken_line() {
        let board = Board::from_layers(3, &["XXO/.../...", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_short_run_against_edge_is_not_a_win() {
        // Two in a row ending at the board edge cannot complete a line of
        // three, and must not be counted by wrapping around.
        let board = Board::from_layers(3, &[".XX/.../...", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_longer_win_length() {
        let board = Board::from_layers(4, &["XXXX/..../....", "..../..../....", "..../..../...."])
            .unwrap();
        assert_eq!(winner(&board), Some(Mark::X));

        let three = Board::from_layers(4, &["XXX./..../....", "..../..../....", "..../..../...."])
            .unwrap();
        assert_eq!(winner(&three), None);
    }

    #[test]
    fn test_symmetric_under_relabeling() {
        let layers = ["XO./XO./X..", ".O./.../...", ".../.../..."];
        let relabeled = ["OX./OX./O..", ".X./.../...", ".../.../..."];
        let board = Board::from_layers(3, &layers).unwrap();
        let swapped = Board::from_layers(3, &relabeled).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(winner(&swapped), Some(Mark::O));
    }
}
