use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};

/// Move the piece in place, clearing the source square. A pawn landing on
/// its promotion row becomes a queen of the same color. Returns whatever
/// stood on the destination.
pub fn apply_move_in_place(board: &mut Board, mv: Move) -> MoveGenResult<Option<Piece>> {
    let moved = board
        .piece_at(mv.from)
        .ok_or(MoveGenerationError::EmptySource(mv.from))?;

    let captured = board.piece_at(mv.to);
    let placed = if moved.kind == PieceKind::Pawn && mv.to.row() == promotion_row(moved.color) {
        Piece::new(moved.color, PieceKind::Queen)
    } else {
        moved
    };

    board.set(mv.to, Some(placed));
    board.set(mv.from, None);

    Ok(captured)
}

/// Apply `mv` to a scratch copy of `board`, leaving the original untouched.
pub fn simulate_move(board: &Board, mv: Move) -> MoveGenResult<Board> {
    let mut next = *board;
    apply_move_in_place(&mut next, mv)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::{apply_move_in_place, simulate_move};
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::MoveGenerationError;
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(
            algebraic_to_square(from).expect("from should parse"),
            algebraic_to_square(to).expect("to should parse"),
        )
    }

    #[test]
    fn simulate_leaves_original_board_untouched() {
        let board = Board::standard();
        let next = simulate_move(&board, mv("e2", "e4"))
            .expect("e2 holds a pawn");
        assert_eq!(board, Board::standard());
        assert!(next.is_empty(mv("e2", "e4").from));
        assert_eq!(
            next.piece_at(mv("e2", "e4").to),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn pawns_on_last_row_become_queens() {
        let mut board = Board::empty();
        let white = mv("b7", "b8");
        let black = mv("g2", "h1");
        board.set(white.from, Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(black.from, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(black.to, Some(Piece::new(Color::White, PieceKind::Rook)));

        apply_move_in_place(&mut board, white).expect("pawn on b7");
        let captured = apply_move_in_place(&mut board, black).expect("pawn on g2");

        let white_queen = Piece::new(Color::White, PieceKind::Queen);
        let black_queen = Piece::new(Color::Black, PieceKind::Queen);
        assert_eq!(board.piece_at(white.to), Some(white_queen));
        assert_eq!(board.piece_at(black.to), Some(black_queen));
        assert_eq!(captured, Some(Piece::new(Color::White, PieceKind::Rook)));
    }

    #[test]
    fn applying_from_empty_square_fails() {
        let mut board = Board::standard();
        let empty = mv("e4", "e5");
        let result = apply_move_in_place(&mut board, empty);
        assert_eq!(result, Err(MoveGenerationError::EmptySource(empty.from)));
        assert_eq!(board, Board::standard());
    }
}
