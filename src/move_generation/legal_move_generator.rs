//! Legality filter.
//!
//! Every candidate is simulated on a scratch board and rejected if the
//! mover's own king is attacked afterwards. Generation order is preserved.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::pseudo_legal::pseudo_legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        all_legal_moves(board, color)
    }
}

/// True iff `mv` does not leave `mover`'s king attacked. A move from an
/// empty square is never legal.
pub fn is_legal(board: &Board, mv: Move, mover: Color) -> bool {
    match simulate_move(board, mv) {
        Ok(next) => !is_king_in_check(&next, mover),
        Err(_) => false,
    }
}

/// Legal moves of the piece on `square`, in pseudo-legal generation order.
pub fn legal_moves(board: &Board, square: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, square)
        .into_iter()
        .map(|to| Move::new(square, to))
        .filter(|mv| is_legal(board, *mv, piece.color))
        .collect()
}

/// Destination squares only, for move highlighting.
pub fn legal_targets(board: &Board, square: Square) -> Vec<Square> {
    legal_moves(board, square)
        .into_iter()
        .map(|mv| mv.to)
        .collect()
}

pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(square, _)| legal_moves(board, square))
        .collect()
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(square, _)| !legal_moves(board, square).is_empty())
}
