//! Engine abstraction layer used by the move advisor and the text front end.
//!
//! Different move-selection strategies sit behind one trait so the front
//! end can swap them at runtime.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Asked for a move in a finished game.
    GameOver,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::GameOver => write!(f, "Game is over! No help available."),
        }
    }
}

impl Error for EngineError {}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `best_move` is `None` when the side to move has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError>;
}
