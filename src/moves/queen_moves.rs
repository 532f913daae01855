use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Rook rays first, then bishop rays.
#[inline]
pub fn queen_moves(board: &Board, square: Square, out: &mut Vec<Square>) {
    rook_moves(board, square, out);
    bishop_moves(board, square, out);
}
