use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Board, Color, Square};

/// Forward pushes first, then diagonal captures (left file before right).
///
/// The double step needs both the intermediate and the destination square
/// to be empty, and is only available from the pawn's start row. Diagonals
/// are only emitted when an enemy piece sits there; there is no en passant.
pub fn pawn_moves(board: &Board, square: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one_step) = square.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if square.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = square.offset(forward, d_col) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != color {
                out.push(to);
            }
        }
    }
}
