//! Static board evaluation.
//!
//! Scores are absolute: positive favours White, negative favours Black,
//! regardless of the side to move.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> i32;
}

/// Plain material count: every White piece adds its value, every Black
/// piece subtracts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| match piece.color {
                Color::White => Self::piece_value(piece.kind),
                Color::Black => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&Board::standard()), 0);
    }

    #[test]
    fn material_is_white_minus_black() {
        let placements = [
            (7, 4, Color::White, PieceKind::King),
            (0, 4, Color::Black, PieceKind::King),
            (4, 4, Color::White, PieceKind::Queen),
            (3, 3, Color::Black, PieceKind::Rook),
            (1, 0, Color::Black, PieceKind::Pawn),
        ];

        let mut board = Board::empty();
        for (row, col, color, kind) in placements {
            let square = Square::new(row, col).expect("square on board");
            board.set(square, Some(Piece::new(color, kind)));
        }

        assert_eq!(MaterialScorer.score(&board), 9 - 5 - 1);
    }
}
