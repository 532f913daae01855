//! FEN-to-GameState parser.
//!
//! Only the piece placement and side-to-move fields are required. Castling
//! and en-passant fields are accepted and ignored since neither rule is
//! played. The halfmove clock is kept on the session and the fullmove
//! number seeds the move table.
//!
//! Positions with a missing or doubled king, or with the side not to move
//! in check, are rejected.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let _castling_part = parts.next();
    let _en_passant_part = parts.next();
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    let halfmove_clock = match halfmove_part {
        Some(halfmove) => halfmove
            .parse::<u16>()
            .map_err(|_| format!("Invalid halfmove clock: {halfmove}"))?,
        None => 0,
    };
    let fullmove_number = match fullmove_part {
        Some(fullmove) => fullmove
            .parse::<u16>()
            .map_err(|_| format!("Invalid fullmove number: {fullmove}"))?,
        None => 1,
    };

    GameState::from_position(board, side_to_move, halfmove_clock, fullmove_number)
}

/// FEN ranks run from rank 8 down to rank 1, which is row 0 to row 7.
pub fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| "Board rank has too many files".to_owned())?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
