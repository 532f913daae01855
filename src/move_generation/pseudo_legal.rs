//! Per-piece pseudo-legal target generation.
//!
//! Dispatches on the piece kind and then drops any target holding a piece of
//! the mover's own color. Sliding rays have already stopped at such a
//! blocker, so removing its square leaves nothing beyond it.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Targets reachable by the piece on `square`, ignoring king safety.
/// An empty square yields no targets.
pub fn pseudo_legal_moves(board: &Board, square: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, piece.color, &mut targets),
        PieceKind::Knight => knight_moves(square, &mut targets),
        PieceKind::Bishop => bishop_moves(board, square, &mut targets),
        PieceKind::Rook => rook_moves(board, square, &mut targets),
        PieceKind::Queen => queen_moves(board, square, &mut targets),
        PieceKind::King => king_moves(square, &mut targets),
    }

    targets.retain(|to| {
        board
            .piece_at(*to)
            .map_or(true, |target| !target.is_same_color(piece))
    });
    targets
}
