use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Board, Color, Move, Square};

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// A move was applied from a square holding no piece.
    EmptySource(Square),
    WorkerPanicked,
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::EmptySource(square) => {
                write!(f, "no piece on source square {square}")
            }
            MoveGenerationError::WorkerPanicked => write!(f, "perft worker thread panicked"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Source of legal moves for engines and perft.
pub trait MoveGenerator: Send + Sync {
    /// Every legal move for `color`, squares scanned in row-major order and
    /// each square's moves kept in generation order.
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move>;
}
