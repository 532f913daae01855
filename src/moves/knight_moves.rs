use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knights jump, so the board contents never restrict the targets.
#[inline]
pub fn knight_moves(square: Square, out: &mut Vec<Square>) {
    out.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col)),
    );
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let mut out = Vec::new();
        knight_moves(Square::new(4, 3).expect("d4"), &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let mut out = Vec::new();
        knight_moves(Square::new(0, 0).expect("a8"), &mut out);
        let c7 = Square::new(1, 2).expect("c7");
        let b6 = Square::new(2, 1).expect("b6");
        assert_eq!(out, vec![c7, b6]);
    }
}
