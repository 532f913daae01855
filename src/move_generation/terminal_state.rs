use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Position classification for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

pub fn classify(board: &Board, color: Color) -> TerminalState {
    let in_check = is_king_in_check(board, color);
    let has_move = has_any_legal_move(board, color);

    match (in_check, has_move) {
        (true, true) => TerminalState::Check,
        (true, false) => TerminalState::Checkmate,
        (false, true) => TerminalState::Ongoing,
        (false, false) => TerminalState::Stalemate,
    }
}
