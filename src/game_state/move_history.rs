//! Move table: one record per full move, White and Black side by side.

use crate::game_state::chess_types::{Color, Move};
use crate::utils::algebraic::move_notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub move_number: u16,
    pub white: Option<String>,
    /// `None` while Black's reply is pending.
    pub black: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    next_move_number: u16,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl MoveHistory {
    pub fn starting_at(move_number: u16) -> Self {
        Self {
            records: Vec::new(),
            next_move_number: move_number.max(1),
        }
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of the move the next record would carry.
    #[inline]
    pub fn current_move_number(&self) -> u16 {
        self.next_move_number
    }

    /// White opens a new record; Black fills the pending slot of the last
    /// record, or opens one with an empty White slot when there is none.
    pub fn record(&mut self, mover: Color, mv: Move, is_capture: bool) {
        let notation = move_notation(mv, is_capture);

        match mover {
            Color::White => self.records.push(MoveRecord {
                move_number: self.next_move_number,
                white: Some(notation),
                black: None,
            }),
            Color::Black => {
                match self.records.last_mut() {
                    Some(last) if last.black.is_none() => last.black = Some(notation),
                    _ => self.records.push(MoveRecord {
                        move_number: self.next_move_number,
                        white: None,
                        black: Some(notation),
                    }),
                }
                self.next_move_number = self.next_move_number.saturating_add(1);
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveHistory, MoveRecord};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(
            algebraic_to_square(from).expect("from should parse"),
            algebraic_to_square(to).expect("to should parse"),
        )
    }

    #[test]
    fn white_and_black_share_a_record() {
        let mut history = MoveHistory::default();
        history.record(Color::White, mv("e2", "e4"), false);
        history.record(Color::Black, mv("d7", "d5"), false);
        history.record(Color::White, mv("e4", "d5"), true);

        assert_eq!(
            history.records(),
            &[
                MoveRecord {
                    move_number: 1,
                    white: Some("e2-e4".to_owned()),
                    black: Some("d7-d5".to_owned()),
                },
                MoveRecord {
                    move_number: 2,
                    white: Some("e4xd5".to_owned()),
                    black: None,
                },
            ]
        );
    }

    #[test]
    fn black_first_opens_record_with_empty_white_slot() {
        let mut history = MoveHistory::starting_at(12);
        history.record(Color::Black, mv("a7", "a6"), false);

        assert_eq!(history.records()[0].move_number, 12);
        assert_eq!(history.records()[0].white, None);
        assert_eq!(history.current_move_number(), 13);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.current_move_number(), 1);
    }
}
