mod cli;

use cli::commands::Command;
use cli::TicTacToe;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    TicTacToe::from_args().execute();
}
