use crate::game_state::chess_types::{Board, Square};
use crate::moves::sliding_rays::trace_ray;

/// Up, down, left, right in board orientation (row 0 is rank 8).
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_moves(board: &Board, square: Square, out: &mut Vec<Square>) {
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, square, d_row, d_col, out);
    }
}
