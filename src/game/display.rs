use crate::board::coord::Coord;
use crate::board::mark::Mark;
use crate::board::Board;
use std::fmt::Write;
use termion::{clear, cursor};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Mark,
        last_move: Option<(Coord, Mark)>,
        stats: Option<&str>,
    ) {
        self.clear();

        write!(self.buffer, "{}", board).unwrap();
        self.buffer.push('\n');

        self.buffer
            .push_str(&format!("Turn: {}\n", current_turn));

        if let Some((coord, mark)) = last_move {
            self.buffer
                .push_str(&format!("Last move: {} at {}\n", mark, coord));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        // Print the complete frame
        print!("{}", self.buffer);
    }
}
