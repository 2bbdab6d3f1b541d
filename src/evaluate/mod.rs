//! Static position evaluation.
//!
//! A decided board scores positive or negative infinity so that the search
//! always prefers (or avoids) a finished line over any finite positional
//! advantage. Undecided boards get a finite score built from two terms:
//! open-line potential and a small centrality bonus.

use crate::board::coord::Coord;
use crate::board::mark::Mark;
use crate::board::Board;
use crate::rules::{winner, LINE_DIRECTIONS};

const CENTRALITY_WEIGHT: f64 = 0.1;

/// Scores the board from `perspective`'s point of view. Only meaningful as
/// a leaf heuristic: it has no knowledge of whose turn it is.
pub fn evaluate(board: &Board, perspective: Mark) -> f64 {
    match winner(board) {
        Some(mark) if mark == perspective => return f64::INFINITY,
        Some(_) => return f64::NEG_INFINITY,
        None => (),
    }

    line_potential(board, perspective) + centrality(board, perspective)
}

/// Sums a score over every window of `win_length` consecutive cells along
/// the 13 direction classes: own count squared for windows the opponent has
/// not touched, minus the opponent count squared for windows the perspective
/// player has not touched. Contested windows are dead and contribute zero.
fn line_potential(board: &Board, perspective: Mark) -> f64 {
    let reach = board.win_length() as isize - 1;
    let mut score = 0.0;

    for z in 0..board.depth() {
        for y in 0..board.height() {
            for x in 0..board.width() {
                for &(dx, dy, dz) in LINE_DIRECTIONS.iter() {
                    let end_x = x as isize + reach * dx;
                    let end_y = y as isize + reach * dy;
                    let end_z = z as isize + reach * dz;
                    if !board.contains(end_x, end_y, end_z) {
                        continue;
                    }

                    let mut own = 0i64;
                    let mut theirs = 0i64;
                    for step in 0..=reach {
                        let coord = Coord::new(
                            (x as isize + step * dx) as usize,
                            (y as isize + step * dy) as usize,
                            (z as isize + step * dz) as usize,
                        );
                        match board.mark_at(coord) {
                            Some(mark) if mark == perspective => own += 1,
                            Some(_) => theirs += 1,
                            None => (),
                        }
                    }

                    if theirs == 0 {
                        score += (own * own) as f64;
                    } else if own == 0 {
                        score -= (theirs * theirs) as f64;
                    }
                }
            }
        }
    }

    score
}

/// A tie-break term that draws marks towards the middle of the board: each
/// occupied cell contributes its distance-from-center shortfall against the
/// board diagonal, scaled down so it never outweighs a line.
fn centrality(board: &Board, perspective: Mark) -> f64 {
    let center_x = (board.width() as f64 - 1.0) / 2.0;
    let center_y = (board.height() as f64 - 1.0) / 2.0;
    let center_z = (board.depth() as f64 - 1.0) / 2.0;
    let diagonal = ((board.width().pow(2) + board.height().pow(2) + board.depth().pow(2)) as f64)
        .sqrt();

    let mut score = 0.0;
    for z in 0..board.depth() {
        for y in 0..board.height() {
            for x in 0..board.width() {
                let mark = match board.mark_at(Coord::new(x, y, z)) {
                    Some(mark) => mark,
                    None => continue,
                };
                let distance = ((x as f64 - center_x).powi(2)
                    + (y as f64 - center_y).powi(2)
                    + (z as f64 - center_z).powi(2))
                .sqrt();
                let bonus = (diagonal - distance) * CENTRALITY_WEIGHT;
                if mark == perspective {
                    score += bonus;
                } else {
                    score -= bonus;
                }
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_neutral() {
        let board = Board::new(3, 3, 3, 3).unwrap();
        assert_eq!(evaluate(&board, Mark::X), 0.0);
        assert_eq!(evaluate(&board, Mark::O), 0.0);
    }

    #[test]
    fn test_decided_board_scores_infinite() {
        let board = Board::from_layers(3, &["XXX/.../...", ".../.../...", ".../.../..."]).unwrap();
        assert_eq!(evaluate(&board, Mark::X), f64::INFINITY);
        assert_eq!(evaluate(&board, Mark::O), f64::NEG_INFINITY);
    }

    #[test]
    fn test_undecided_board_scores_finite() {
        let board = Board::from_layers(3, &["XX./O../...", ".../.O./...", ".../.../..."]).unwrap();
        assert!(evaluate(&board, Mark::X).is_finite());
        assert!(evaluate(&board, Mark::O).is_finite());
    }

    #[test]
    fn test_infinity_agrees_with_win_detection() {
        let boards = [
            Board::from_layers(3, &["O../O../O..", ".../.../...", ".../.../..."]).unwrap(),
            Board::from_layers(3, &["X../.../...", ".../.X./...", ".../.../..X"]).unwrap(),
            Board::from_layers(3, &["XO./OX./...", ".../.../...", ".../.../..."]).unwrap(),
        ];
        for board in boards.iter() {
            match winner(board) {
                Some(mark) => {
                    assert_eq!(evaluate(board, mark), f64::INFINITY);
                    assert_eq!(evaluate(board, mark.opposite()), f64::NEG_INFINITY);
                }
                None => {
                    assert!(evaluate(board, Mark::X).is_finite());
                    assert!(evaluate(board, Mark::O).is_finite());
                }
            }
        }
    }

    #[test]
    fn test_perspectives_are_antisymmetric() {
        let board = Board::from_layers(3, &["XO./.X./...", "O../.../...", ".../.../..X"]).unwrap();
        assert_eq!(evaluate(&board, Mark::X), -evaluate(&board, Mark::O));
    }

    #[test]
    fn test_center_beats_corner() {
        let mut center = Board::new(3, 3, 3, 3).unwrap();
        center.place(Coord::new(1, 1, 1), Mark::X);
        let mut corner = Board::new(3, 3, 3, 3).unwrap();
        corner.place(Coord::new(0, 0, 0), Mark::X);

        assert!(evaluate(&center, Mark::X) > evaluate(&corner, Mark::X));
    }

    #[test]
    fn test_contested_lines_are_dead() {
        // Every window containing both marks contributes nothing, so a board
        // where each mark only appears in contested windows scores on
        // centrality alone.
        let open = Board::from_layers(2, &["X./.."]).unwrap();
        let contested = Board::from_layers(2, &["XO/.."]).unwrap();
        assert!(evaluate(&open, Mark::X) > evaluate(&contested, Mark::X));
    }
}
