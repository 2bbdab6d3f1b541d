use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::board::coord::Coord;
use crate::board::error::BoardError;
use crate::board::mark::Mark;
use crate::board::Board;
use crate::evaluate;
use crate::rules::{self, GameEnding};
use crate::searcher::Searcher;

/// Core engine configuration: the starting position plus search settings.
#[derive(Clone)]
pub struct EngineConfig {
    pub starting_position: Board,
    pub starting_player: Mark,
    pub search_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::default(),
            starting_player: Mark::X,
            search_depth: 4,
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid move: {coord} is outside the board or occupied")]
    InvalidMove { coord: Coord },
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("board error: {error}")]
    BoardError {
        #[from]
        error: BoardError,
    },
}

/// One undo step: the board as it was before a move, together with the
/// player who was on move at that time. Restoring the pair also reverses
/// whatever player switch accompanied the move.
#[derive(Clone)]
struct HistoryEntry {
    board: Board,
    player: Mark,
}

/// A single game session: the board, the player on move, and the undo
/// history. The engine owns the searcher and decides its own moves through
/// `computer_move`.
pub struct Engine {
    board: Board,
    current_player: Mark,
    history: Vec<HistoryEntry>,
    searcher: Searcher,
    search_depth: u8,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            current_player: config.starting_player,
            history: Vec::new(),
            searcher: Searcher::new(),
            search_depth: config.search_depth,
        }
    }

    /// Resets the session to an empty board with the given dimensions.
    /// Illegal configurations are rejected before any state is replaced.
    pub fn start(
        &mut self,
        width: usize,
        height: usize,
        depth: usize,
        win_length: usize,
    ) -> Result<(), EngineError> {
        self.board = Board::new(width, height, depth, win_length)?;
        self.current_player = Mark::X;
        self.history.clear();
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board.valid_moves()
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    /// Applies the current player's mark at `coord`, recording an undo
    /// snapshot first. Does not switch the player: that is the caller's
    /// move to make, so that probing and search can share this board.
    pub fn make_move(&mut self, coord: Coord) -> Result<(), EngineError> {
        if !self.board.is_valid_move(coord) {
            return Err(EngineError::InvalidMove { coord });
        }
        self.history.push(HistoryEntry {
            board: self.board.clone(),
            player: self.current_player,
        });
        self.board.place(coord, self.current_player);
        Ok(())
    }

    /// Restores the most recent snapshot: board and pre-move player.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        match self.history.pop() {
            Some(entry) => {
                self.board = entry.board;
                self.current_player = entry.player;
                Ok(())
            }
            None => Err(EngineError::NothingToUndo),
        }
    }

    pub fn check_winner(&self) -> Option<Mark> {
        rules::winner(&self.board)
    }

    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        rules::game_ending(&self.board)
    }

    pub fn evaluate(&self, perspective: Mark) -> f64 {
        evaluate::evaluate(&self.board, perspective)
    }

    /// Plays a move for the player currently on move and switches the turn.
    ///
    /// The decision cascades: an immediately winning move is played without
    /// search; otherwise an immediately winning opponent move is blocked;
    /// otherwise the opening move goes to the board center; otherwise the
    /// move comes out of the alpha-beta search. The first two scans and the
    /// root search all visit candidates in canonical order and keep the
    /// first qualifying move, so play is deterministic.
    ///
    /// Returns the move played, or `Ok(None)` when the board has no moves.
    pub fn computer_move(&mut self, search_depth: u8) -> Result<Option<Coord>, EngineError> {
        let ai_player = self.current_player;
        let opponent = ai_player.opposite();

        for coord in self.board.valid_moves() {
            self.board.place(coord, ai_player);
            let wins = rules::winner(&self.board) == Some(ai_player);
            self.board.clear_cell(coord);
            if wins {
                debug!("winning move at {}", coord);
                return self.apply_and_switch(coord).map(Some);
            }
        }

        for coord in self.board.valid_moves() {
            self.board.place(coord, opponent);
            let loses = rules::winner(&self.board) == Some(opponent);
            self.board.clear_cell(coord);
            if loses {
                debug!("blocking move at {}", coord);
                return self.apply_and_switch(coord).map(Some);
            }
        }

        if self.board.is_empty() {
            let center = Coord::new(
                self.board.width() / 2,
                self.board.height() / 2,
                self.board.depth() / 2,
            );
            debug!("opening move at {}", center);
            return self.apply_and_switch(center).map(Some);
        }

        match self
            .searcher
            .find_best_move(&mut self.board, search_depth, ai_player)
        {
            Some(coord) => {
                debug!(
                    "searched move at {} (score {:?}, {} positions)",
                    coord,
                    self.searcher.last_score(),
                    self.searcher.searched_position_count()
                );
                self.apply_and_switch(coord).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searcher.searched_position_count(),
            cutoffs: self.searcher.cutoff_count(),
            depth: self.search_depth,
            last_score: self.searcher.last_score(),
            last_search_duration: self.searcher.last_duration(),
        }
    }

    fn apply_and_switch(&mut self, coord: Coord) -> Result<Coord, EngineError> {
        self.make_move(coord)?;
        self.switch_player();
        Ok(coord)
    }
}

/// Search performance statistics for the most recent engine move.
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<f64>,
    pub last_search_duration: Option<Duration>,
}
