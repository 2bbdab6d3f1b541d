use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two player symbols that can occupy a cell.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    X = 0,
    O = 1,
}

impl Mark {
    const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn opposite(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Mark {
    type Err = ParseError;
    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        match mark {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            "random" => Ok(Mark::random()),
            _ => Err("invalid mark; options are: x, o, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Mark::ALL.contains(&Mark::random()));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Mark::X.opposite(), Mark::O);
        assert_eq!(Mark::O.opposite(), Mark::X);
    }

    #[test]
    fn test_parse_x() {
        assert_eq!(Mark::X, Mark::from_str("x").unwrap());
        assert_eq!(Mark::X, Mark::from_str("X").unwrap());
    }

    #[test]
    fn test_parse_o() {
        assert_eq!(Mark::O, Mark::from_str("o").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_mark = Mark::from_str("random").unwrap();
        assert!(Mark::ALL.contains(&rand_mark));
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Mark::from_char('X'), Some(Mark::X));
        assert_eq!(Mark::from_char('O'), Some(Mark::O));
        assert_eq!(Mark::from_char('.'), None);
    }
}
