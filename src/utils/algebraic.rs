//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares, and formats moves for the move table.

use crate::game_state::chess_types::{Move, Square};

/// File letter (`a`..`h`) followed by rank number (`8 - row`).
#[inline]
pub fn to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Square::new(b'8' - rank, file - b'a')
        .ok_or_else(|| format!("Invalid algebraic square: {square}"))
}

/// Move-table notation: `e2-e4` for quiet moves, `e4xd5` for captures.
pub fn move_notation(mv: Move, is_capture: bool) -> String {
    let separator = if is_capture { 'x' } else { '-' };
    let from = to_algebraic(mv.from);
    let to = to_algebraic(mv.to);
    format!("{from}{separator}{to}")
}

/// Parse a coordinate move such as `e2e4`, `e2-e4`, `e2xe4` or `e2 e4`.
pub fn parse_coordinate_move(text: &str) -> Result<Move, String> {
    let squares: String = text
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | 'x' | 'X'))
        .collect();
    if squares.len() != 4 || !squares.is_ascii() {
        return Err(format!("Invalid move: {text}"));
    }

    let from = algebraic_to_square(&squares[0..2])?;
    let to = algebraic_to_square(&squares[2..4])?;
    Ok(Move::new(from, to))
}
