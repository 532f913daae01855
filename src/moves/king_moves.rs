use crate::game_state::chess_types::Square;

/// Single steps to the eight neighbours; no castling.
#[inline]
pub fn king_moves(square: Square, out: &mut Vec<Square>) {
    for d_row in -1i8..=1 {
        for d_col in -1i8..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(to) = square.offset(d_row, d_col) {
                out.push(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_in_centre_has_eight_targets_and_three_in_corner() {
        let mut out = Vec::new();
        king_moves(Square::new(4, 4).expect("e4"), &mut out);
        assert_eq!(out.len(), 8);

        out.clear();
        king_moves(Square::new(7, 7).expect("h1"), &mut out);
        assert_eq!(out.len(), 3);
    }
}
