//! Shared utilities for CLI commands.

use tictactoe::board::error::BoardError;
use tictactoe::board::mark::Mark;
use tictactoe::board::Board;
use tictactoe::game::engine::EngineConfig;
use tictactoe::game::input_source::InputSource;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(
    width: usize,
    height: usize,
    layers: usize,
    win_length: usize,
    search_depth: u8,
) -> Result<EngineConfig, BoardError> {
    Ok(EngineConfig {
        starting_position: Board::new(width, height, layers, win_length)?,
        starting_player: Mark::X,
        search_depth,
    })
}
