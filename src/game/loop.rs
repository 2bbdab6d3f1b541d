use crate::board::coord::Coord;
use crate::board::mark::Mark;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::{InputError, MoveInput};
use crate::rules::GameEnding;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
    last_move: Option<(Coord, Mark)>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
            last_move: None,
        }
    }

    pub fn run(&mut self) {
        loop {
            let current_turn = self.engine.current_player();

            if let Some(ending) = self.engine.check_game_over() {
                self.ui.render_game_state(
                    self.engine.board(),
                    current_turn,
                    self.last_move,
                    None,
                );
                match ending {
                    GameEnding::Win(mark) => println!("{} wins!", mark),
                    GameEnding::Draw => println!("Draw!"),
                }
                break;
            }

            self.renderer
                .render(&mut self.ui, &self.engine, current_turn, self.last_move);

            match self.input_source.get_move(current_turn) {
                Ok(Some(MoveInput::Coordinate(coord))) => {
                    match self.engine.make_move(coord) {
                        Ok(()) => {
                            self.engine.switch_player();
                            self.last_move = Some((coord, current_turn));
                        }
                        Err(error) => println!("error: {}", error),
                    }
                }
                Ok(Some(MoveInput::UseEngine)) => {
                    let depth = self.engine.search_depth();
                    match self.engine.computer_move(depth) {
                        Ok(Some(coord)) => {
                            self.last_move = Some((coord, current_turn));
                            if let Some(delay) = self.renderer.frame_delay() {
                                std::thread::sleep(delay);
                            }
                        }
                        Ok(None) => (),
                        Err(error) => println!("error: {}", error),
                    }
                }
                Ok(Some(MoveInput::Undo)) => {
                    // Take back a full round: the engine's reply plus the
                    // player's own move.
                    match self.engine.undo().and_then(|_| self.engine.undo()) {
                        Ok(()) => self.last_move = None,
                        Err(error) => println!("error: {}", error),
                    }
                }
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }
    }
}
