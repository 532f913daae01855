//! Game session state.
//!
//! `GameState` owns the board, the side to move, the derived status and the
//! move table. The front end drives it through `attempt_move`,
//! `legal_moves`, `suggest_move` and `time_expired`; nothing else mutates it.

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;
use crate::game_state::move_history::MoveHistory;
use crate::game_state::move_rejection::MoveRejection;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::validate_position;
use crate::move_generation::legal_move_generator::{legal_moves, legal_targets};
use crate::move_generation::terminal_state::classify;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    /// Plies since the last pawn move or capture.
    halfmove_clock: u16,
    history: MoveHistory,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial layout, White to move, ongoing.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            status: GameStatus::Ongoing,
            halfmove_clock: 0,
            history: MoveHistory::default(),
        }
    }

    /// Build a session around an arbitrary position. The status is derived
    /// from the position, so a mated side to move yields a finished game.
    ///
    /// Fails unless each side has exactly one king and the side that is not
    /// to move is out of check.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        halfmove_clock: u16,
        move_number: u16,
    ) -> Result<Self, String> {
        validate_position(&board, side_to_move)?;

        let status = GameStatus::from_terminal_state(classify(&board, side_to_move), side_to_move);
        Ok(Self {
            board,
            side_to_move,
            status,
            halfmove_clock,
            history: MoveHistory::starting_at(move_number),
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Throw the current game away and start over.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Validate and play `from -> to` for the side to move.
    ///
    /// On rejection the session is left exactly as it was.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveRejection> {
        if self.is_game_over() {
            return Err(MoveRejection::GameAlreadyOver);
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveRejection::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveRejection::WrongTurn(from));
        }

        let mv = Move::new(from, to);
        if !legal_moves(&self.board, from).contains(&mv) {
            return Err(MoveRejection::IllegalDestination { from, to });
        }

        let captured = apply_move_in_place(&mut self.board, mv)
            .map_err(|_| MoveRejection::EmptySquare(from))?;
        self.history.record(self.side_to_move, mv, captured.is_some());
        self.halfmove_clock = if piece.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        self.side_to_move = self.side_to_move.opposite();
        self.status = GameStatus::from_terminal_state(
            classify(&self.board, self.side_to_move),
            self.side_to_move,
        );

        Ok(MoveOutcome {
            mv,
            captured,
            status: self.status,
        })
    }

    /// Legal destinations of the piece on `from`, for highlighting. Empty
    /// for an empty square or a finished game.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        legal_targets(&self.board, from)
    }

    /// Greedy one-ply suggestion for the side to move, or `None` when the
    /// game is over or no legal move exists.
    pub fn suggest_move(&self) -> Option<Move> {
        GreedyEngine::new()
            .choose_move(self)
            .ok()
            .and_then(|out| out.best_move)
    }

    /// The external clock for `color` ran out: `color` loses on time. The
    /// board is not touched.
    pub fn time_expired(&mut self, color: Color) -> Result<GameStatus, MoveRejection> {
        if self.is_game_over() {
            return Err(MoveRejection::GameAlreadyOver);
        }
        self.status = GameStatus::TimedOut {
            winner: color.opposite(),
        };
        Ok(self.status)
    }
}

/// Convenience entry point mirroring `GameState::new_game`.
pub fn new_game() -> GameState {
    GameState::new_game()
}
