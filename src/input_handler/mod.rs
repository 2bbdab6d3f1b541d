use std::io;

use crate::board::coord::Coord;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate(Coord),
    UseEngine,
    Undo,
}

/// Reads one line from stdin and parses it as a move command: `x y z`
/// coordinates (also accepted comma-separated), `undo`, or `quit`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let raw = match io::stdin().read_line(&mut input) {
        Ok(_n) => input.trim_start().trim_end(),
        Err(error) => {
            return Err(InputError::IOError {
                error: error.to_string(),
            })
        }
    };

    parse_move(raw)
}

fn parse_move(raw: &str) -> Result<MoveInput, InputError> {
    match raw {
        "quit" | "exit" => return Err(InputError::UserExit),
        "undo" => return Ok(MoveInput::Undo),
        _ => (),
    };

    let coordinate_re = Regex::new(r"^(\d+)[,\s]\s*(\d+)[,\s]\s*(\d+)$").unwrap();
    if let Some(caps) = coordinate_re.captures(raw) {
        let x = caps.get(1).unwrap().as_str();
        let y = caps.get(2).unwrap().as_str();
        let z = caps.get(3).unwrap().as_str();
        let parse = |s: &str| {
            s.parse::<usize>().map_err(|_| InputError::InvalidInput {
                input: raw.to_string(),
            })
        };
        return Ok(MoveInput::Coordinate(Coord::new(
            parse(x)?,
            parse(y)?,
            parse(z)?,
        )));
    }

    Err(InputError::InvalidInput {
        input: raw.to_string(),
    })
}
