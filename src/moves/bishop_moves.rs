use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding_rays::trace_ray;

/// Up-left, up-right, down-left, down-right.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_moves(board: &Board, square: Square, out: &mut Vec<Square>) {
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, square, d_row, d_col, out);
    }
}
