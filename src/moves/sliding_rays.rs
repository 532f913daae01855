use crate::game_state::chess_types::{Board, Square};

/// Walk from `square` in one direction, collecting every square up to and
/// including the first occupied one. Nothing beyond a blocker is reached,
/// whatever its color.
pub fn trace_ray(board: &Board, square: Square, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut current = square;
    while let Some(next) = current.offset(d_row, d_col) {
        out.push(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::trace_ray;
    use crate::game_state::chess_types::*;

    #[test]
    fn blocker_stops_ray_and_is_included() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0).expect("a1 should exist");
        let a4 = Square::new(4, 0).expect("a4 should exist");
        board.set(a4, Some(Piece::new(Color::White, PieceKind::Pawn)));

        let mut out = Vec::new();
        trace_ray(&board, a1, -1, 0, &mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(out.last(), Some(&a4));
    }

    #[test]
    fn open_ray_runs_to_edge() {
        let board = Board::empty();
        let mut out = Vec::new();
        trace_ray(&board, Square::new(7, 0).expect("a1"), -1, 1, &mut out);
        assert_eq!(out.len(), 7);
    }
}
