use super::coord::Coord;
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for z in 0..self.depth() {
            writeln!(f, "z = {}", z)?;
            write!(f, "    ")?;
            for x in 0..self.width() {
                write!(f, "{:<2}", x)?;
            }
            writeln!(f)?;
            for y in 0..self.height() {
                write!(f, "{:>3} ", y)?;
                for x in 0..self.width() {
                    let cell = match self.mark_at(Coord::new(x, y, z)) {
                        Some(mark) => mark.to_char(),
                        None => '.',
                    };
                    write!(f, "{} ", cell)?;
                }
                writeln!(f)?;
            }
            if z + 1 < self.depth() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::mark::Mark;
    use super::*;

    #[test]
    fn test_render_single_layer() {
        let mut board = Board::new(2, 2, 1, 2).unwrap();
        board.put(Coord::new(0, 0, 0), Mark::X).unwrap();
        board.put(Coord::new(1, 1, 0), Mark::O).unwrap();

        let rendered = board.to_string();
        assert!(rendered.contains("z = 0"));
        assert!(rendered.contains("X ."));
        assert!(rendered.contains(". O"));
    }
}
