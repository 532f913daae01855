use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::pseudo_legal_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// True iff some opposing piece has `color`'s king square among its
/// pseudo-legal targets on this exact board.
///
/// A board without a king of `color` is reported as not in check. Normal
/// play never produces such a board, but constructed positions can.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| pseudo_legal_moves(board, from).contains(&square))
}

/// Squares (and kinds) of the `attacker_color` pieces hitting `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| pseudo_legal_moves(board, *from).contains(&square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

/// Reject boards no game could reach: each side needs exactly one king, and
/// the side that just moved cannot have left its own king attacked.
pub fn validate_position(board: &Board, side_to_move: Color) -> Result<(), String> {
    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(format!("{color} must have exactly one king, found {kings}"));
        }
    }

    let defender = side_to_move.opposite();
    let Some(king_sq) = king_square(board, defender) else {
        return Ok(());
    };
    let checkers = attackers_to_square(board, king_sq, side_to_move);
    if let Some((from, kind)) = checkers.first() {
        return Err(format!(
            "{defender} king on {king_sq} is already attacked by the {kind} on {from}"
        ));
    }

    Ok(())
}
