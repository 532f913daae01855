use std::sync::Arc;
use std::thread;

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side_to_move: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side_to_move) {
        perft_recurse(generator, board, side_to_move, mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side_to_move: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side_to_move);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = *board;
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(
                generator_ref.as_ref(),
                &root,
                side_to_move,
                mv,
                depth,
                1,
                &mut local,
            );
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| MoveGenerationError::WorkerPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    mover: Color,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let next = simulate_move(board, mv)?;
    let defender = mover.opposite();

    if current_depth == search_depth {
        counts.nodes += 1;

        if board.piece_at(mv.to).is_some() {
            counts.captures += 1;
        }
        let is_pawn = board
            .piece_at(mv.from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn);
        if is_pawn && mv.to.row() == promotion_row(mover) {
            counts.promotions += 1;
        }
        if is_king_in_check(&next, defender) {
            counts.checks += 1;
            if generator.generate_legal_moves(&next, defender).is_empty() {
                counts.checkmates += 1;
            }
        }

        return Ok(());
    }

    for child in generator.generate_legal_moves(&next, defender) {
        perft_recurse(
            generator,
            &next,
            defender,
            child,
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }

    Ok(())
}
