use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

/// Why a move request was refused. Every rejection leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Checkmate, stalemate or a flag fall already ended the game.
    GameAlreadyOver,
    /// No piece stands on the selected source square.
    EmptySquare(Square),
    /// The selected piece belongs to the side not on move.
    WrongTurn(Square),
    /// `to` is not among the legal destinations of the piece on `from`.
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameAlreadyOver => write!(f, "Game is over!"),
            MoveRejection::EmptySquare(square) => write!(f, "No piece on {square}!"),
            MoveRejection::WrongTurn(square) => {
                write!(f, "The piece on {square} belongs to the other side!")
            }
            MoveRejection::IllegalDestination { from, to } => {
                write!(f, "Invalid move {from}-{to}!")
            }
        }
    }
}

impl Error for MoveRejection {}
