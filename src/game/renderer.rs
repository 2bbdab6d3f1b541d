use crate::board::coord::Coord;
use crate::board::mark::Mark;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use std::time::Duration;

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<(Coord, Mark)>,
    );
    fn frame_delay(&self) -> Option<Duration>;
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<(Coord, Mark)>,
    ) {
        ui.render_game_state(engine.board(), current_turn, last_move, None);
        println!("Enter your move as `x y z` (or `undo`, `quit`):");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<(Coord, Mark)>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_turn, last_move, Some(&stats_display));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_mark: Mark,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<(Coord, Mark)>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_turn, last_move, Some(&stats_display));
        if current_turn == self.human_mark {
            println!("Enter your move as `x y z` (or `undo`, `quit`):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {})\n* Move took: {}",
        stats
            .last_score
            .map_or("-".to_string(), |s| format!("{:.1}", s)),
        stats.positions_searched,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}
