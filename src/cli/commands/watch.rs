//! Watch command - the computer plays against itself.

use std::time::Duration;

use structopt::StructOpt;
use tictactoe::game::input_source::EngineInput;
use tictactoe::game::renderer::StatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long, default_value = "3")]
    pub width: usize,
    #[structopt(long, default_value = "3")]
    pub height: usize,
    #[structopt(long, default_value = "3")]
    pub layers: usize,
    #[structopt(long = "win-length", default_value = "3")]
    pub win_length: usize,
    #[structopt(long = "delay-ms", default_value = "1000")]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
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
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
