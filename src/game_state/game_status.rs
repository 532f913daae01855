use std::fmt;

use crate::game_state::chess_types::Color;
use crate::move_generation::terminal_state::TerminalState;

/// Status of a game as seen by the front end. Derived from the board after
/// every accepted move, or set by a clock expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    InCheck(Color),
    Checkmate { winner: Color },
    Stalemate,
    TimedOut { winner: Color },
}

impl GameStatus {
    /// Status for `side_to_move` given its classified position.
    pub fn from_terminal_state(state: TerminalState, side_to_move: Color) -> Self {
        match state {
            TerminalState::Ongoing => GameStatus::Ongoing,
            TerminalState::Check => GameStatus::InCheck(side_to_move),
            TerminalState::Checkmate => GameStatus::Checkmate {
                winner: side_to_move.opposite(),
            },
            TerminalState::Stalemate => GameStatus::Stalemate,
        }
    }

    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::TimedOut { .. }
        )
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::TimedOut { winner } => Some(winner),
            _ => None,
        }
    }

    /// PGN-style result token.
    pub const fn result_token(self) -> &'static str {
        match self {
            GameStatus::Checkmate { winner: Color::White }
            | GameStatus::TimedOut { winner: Color::White } => "1-0",
            GameStatus::Checkmate { winner: Color::Black }
            | GameStatus::TimedOut { winner: Color::Black } => "0-1",
            GameStatus::Stalemate => "1/2-1/2",
            GameStatus::Ongoing | GameStatus::InCheck(_) => "*",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => Ok(()),
            GameStatus::InCheck(color) => write!(f, "{color} is in check!"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {winner} wins!"),
            GameStatus::Stalemate => write!(f, "Stalemate! Draw!"),
            GameStatus::TimedOut { winner } => write!(
                f,
                "{} ran out of time! {winner} wins.",
                winner.opposite()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::terminal_state::TerminalState;

    #[test]
    fn checkmate_credits_the_side_that_just_moved() {
        let status = GameStatus::from_terminal_state(TerminalState::Checkmate, Color::White);
        assert_eq!(status, GameStatus::Checkmate { winner: Color::Black });
        assert!(status.is_game_over());
        assert_eq!(status.to_string(), "Checkmate! Black wins!");
        assert_eq!(status.result_token(), "0-1");
    }

    #[test]
    fn check_is_not_game_over() {
        let status = GameStatus::from_terminal_state(TerminalState::Check, Color::Black);
        assert_eq!(status, GameStatus::InCheck(Color::Black));
        assert!(!status.is_game_over());
        assert_eq!(status.to_string(), "Black is in check!");
    }

    #[test]
    fn timeout_message_names_the_flagged_side() {
        let status = GameStatus::TimedOut { winner: Color::Black };
        assert_eq!(status.to_string(), "White ran out of time! Black wins.");
        assert_eq!(status.winner(), Some(Color::Black));
    }
}
