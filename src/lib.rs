pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod rules;
pub mod searcher;
