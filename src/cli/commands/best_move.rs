//! Best-move command - calculate the engine move for a given position.

use structopt::StructOpt;
use tictactoe::board::mark::Mark;
use tictactoe::board::Board;
use tictactoe::game::engine::{Engine, EngineConfig};

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    /// Position in layer notation, one string per layer, e.g.
    /// `--position "XX./OO./..." ".../.../..." ".../.../..."`.
    #[structopt(long, required = true)]
    pub position: Vec<String>,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "p", long = "player", default_value = "x")]
    pub player: Mark,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: usize,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let layers: Vec<&str> = self.position.iter().map(String::as_str).collect();
        let board = match Board::from_layers(self.win_length, &layers) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("error: {}", error);
                return;
            }
        };

        let mut engine = Engine::with_config(EngineConfig {
            starting_position: board,
            starting_player: self.player,
            search_depth: self.depth,
        });

        match engine.computer_move(self.depth) {
            Ok(Some(coord)) => {
                let stats = engine.search_stats();
                println!("best move: {}", coord);
                println!(
                    "score: {}, positions searched: {}",
                    stats
                        .last_score
                        .map_or("-".to_string(), |s| format!("{:.1}", s)),
                    stats.positions_searched
                );
            }
            Ok(None) => println!("no moves available"),
            Err(error) => eprintln!("error: {}", error),
        }
    }
}
