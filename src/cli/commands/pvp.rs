//! Pvp command - play a game against another human on this local machine.

use structopt::StructOpt;
use tictactoe::game::input_source::HumanInput;
use tictactoe::game::renderer::SimpleRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long, default_value = "3")]
    pub width: usize,
    #[structopt(long, default_value = "3")]
    pub height: usize,
    #[structopt(long, default_value = "3")]
    pub layers: usize,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: usize,
}

impl Command for PvpArgs {
    fn execute(self) {
        // Search settings are irrelevant here; both sides are human.
        let config = match create_config(self.width, self.height, self.layers, self.win_length, 1) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("error: {}", error);
                return;
            }
        };
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
