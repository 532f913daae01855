//! One-ply greedy move advisor.
//!
//! Plays every legal move on a scratch board, scores the result and keeps the
//! best one for the side to move: highest score for White, lowest for Black.
//! Ties keep the earliest move in generation order, so the suggestion is
//! deterministic.

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

pub struct GreedyEngine<S: BoardScorer = MaterialScorer> {
    move_generator: LegalMoveGenerator,
    scorer: S,
}

impl GreedyEngine<MaterialScorer> {
    pub fn new() -> Self {
        Self::with_scorer(MaterialScorer)
    }
}

impl Default for GreedyEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> GreedyEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer,
        }
    }

    /// Best move and its score for `side_to_move`, or `None` without legal moves.
    pub fn best_move(&self, board: &Board, side_to_move: Color) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;

        for mv in self.move_generator.generate_legal_moves(board, side_to_move) {
            let Ok(next) = simulate_move(board, mv) else {
                continue;
            };
            let score = self.scorer.score(&next);

            let improves = match best {
                None => true,
                Some((_, best_score)) => match side_to_move {
                    Color::White => score > best_score,
                    Color::Black => score < best_score,
                },
            };
            if improves {
                best = Some((mv, score));
            }
        }

        best
    }
}

impl<S: BoardScorer> Engine for GreedyEngine<S> {
    fn name(&self) -> &str {
        "Greedy Material"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        if game_state.is_game_over() {
            return Err(EngineError::GameOver);
        }

        let mut out = EngineOutput::default();
        match self.best_move(game_state.board(), game_state.side_to_move()) {
            Some((mv, score)) => {
                out.info_lines
                    .push(format!("info string greedy_engine best {mv} score {score}"));
                out.best_move = Some(mv);
            }
            None => out
                .info_lines
                .push("info string greedy_engine no legal moves".to_owned()),
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::{Engine, EngineError};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn opening_suggestion_is_first_generated_move() {
        // Nothing changes material, so the first move in row-major order wins.
        let game = GameState::new_game();
        assert_eq!(game.suggest_move(), Some(Move::new(sq("a2"), sq("a3"))));
    }

    #[test]
    fn suggestion_is_deterministic() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/8/PPP2PPP/RNBQKBNR w - - 0 3";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let first = game.suggest_move();
        assert!(first.is_some());
        assert_eq!(game.suggest_move(), first);
        assert_eq!(game.suggest_move(), first);
    }

    #[test]
    fn white_takes_the_most_valuable_piece() {
        let game = GameState::from_fen("4k3/8/8/3q1r2/4P3/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(game.suggest_move(), Some(Move::new(sq("e4"), sq("d5"))));
    }

    #[test]
    fn black_minimises_the_score() {
        let game = GameState::from_fen("4k3/8/8/8/8/2n5/8/R2QK3 b - - 0 1")
            .expect("FEN should parse");
        let best = GreedyEngine::new().best_move(game.board(), Color::Black);
        let knight_takes_queen = Move::new(sq("c3"), sq("d1"));
        assert_eq!(best, Some((knight_takes_queen, 100 + 5 - 3 - 100)));
    }

    #[test]
    fn finished_game_is_refused() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("FEN should parse");
        assert!(game.is_game_over());
        assert_eq!(
            GreedyEngine::new().choose_move(&game).err(),
            Some(EngineError::GameOver)
        );
    }
}
