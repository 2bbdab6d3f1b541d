//! Minimax search with alpha-beta pruning.
//!
//! The searcher explores the game tree to a fixed depth, mutating the board
//! in place and restoring every cell before returning. It never touches the
//! undo history or the player turn: those belong to the game session, and
//! skipping them keeps per-node cost down to a cell write and a cell clear.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::coord::Coord;
use crate::board::mark::Mark;
use crate::board::Board;
use crate::evaluate;
use crate::rules;

pub struct Searcher {
    searched_position_count: usize,
    cutoff_count: usize,
    last_score: Option<f64>,
    last_duration: Option<Duration>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            searched_position_count: 0,
            cutoff_count: 0,
            last_score: None,
            last_duration: None,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.cutoff_count
    }

    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.cutoff_count = 0;
        self.last_score = None;
        self.last_duration = None;
    }

    /// Scores every valid move for `ai_player` and returns the best one, or
    /// None when the board has no moves left. Candidates are scored in
    /// canonical order and ties keep the first candidate found, so the
    /// result is deterministic for a given position.
    pub fn find_best_move(
        &mut self,
        board: &mut Board,
        search_depth: u8,
        ai_player: Mark,
    ) -> Option<Coord> {
        self.reset_stats();
        let start = Instant::now();

        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;

        for coord in board.valid_moves() {
            board.place(coord, ai_player);
            let score = self.minimax(
                board,
                search_depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                ai_player,
            );
            board.clear_cell(coord);
            debug!("candidate {}: {}", coord, score);

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(coord);
            }
        }

        if best_move.is_some() {
            self.last_score = Some(best_score);
        }
        self.last_duration = Some(start.elapsed());
        debug!(
            "searched {} positions, {} cutoffs",
            self.searched_position_count, self.cutoff_count
        );

        best_move
    }

    /// Recursive alpha-beta minimax. `maximizing` nodes place `ai_player`'s
    /// mark and raise `alpha`; minimizing nodes place the opponent's mark
    /// and lower `beta`. Once `beta <= alpha` the remaining siblings at that
    /// node are pruned.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        remaining_depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        ai_player: Mark,
    ) -> f64 {
        self.searched_position_count += 1;

        if let Some(mark) = rules::winner(board) {
            return if mark == ai_player {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }

        if remaining_depth == 0 || board.is_full() {
            return evaluate::evaluate(board, ai_player);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for coord in board.valid_moves() {
                board.place(coord, ai_player);
                let score =
                    self.minimax(board, remaining_depth - 1, alpha, beta, false, ai_player);
                board.clear_cell(coord);

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.cutoff_count += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for coord in board.valid_moves() {
                board.place(coord, ai_player.opposite());
                let score =
                    self.minimax(board, remaining_depth - 1, alpha, beta, true, ai_player);
                board.clear_cell(coord);

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.cutoff_count += 1;
                    break;
                }
            }
            best
        }
    }
}
