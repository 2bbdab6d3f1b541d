//! Play command - play a game against the computer.

use structopt::StructOpt;
use tictactoe::board::mark::Mark;
use tictactoe::game::input_source::ConditionalInput;
use tictactoe::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "m", long = "mark", default_value = "random")]
    pub mark: Mark,
    #[structopt(long, default_value = "3")]
    pub width: usize,
    #[structopt(long, default_value = "3")]
    pub height: usize,
    #[structopt(long, default_value = "3")]
    pub layers: usize,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: usize,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = match create_config(
            self.width,
            self.height,
            self.layers,
            self.win_length,
            self.depth,
        ) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("error: {}", error);
                return;
            }
        };
        run_game_loop(
            ConditionalInput {
                human_mark: self.mark,
            },
            ConditionalStatsRenderer {
                human_mark: self.mark,
            },
            config,
        );
    }
}
