//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "A generalized 3D tic-tac-toe engine implemented in Rust"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 4). Your mark will be chosen at random unless you specify with `--mark`. Board dimensions and win length can be set with `--width`, `--height`, `--layers` and `--win-length` (default: 3x3x3, win length 3)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Use the engine to determine the best move from a given position, provided in layer notation with `--position` (one string per layer, rows separated by `/`, cells `X`, `O` or `.`). You can optionally specify the depth of the search with the `--depth` arg (default: 4)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::Pvp(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::BestMove(cmd) => cmd.execute(),
        }
    }
}
