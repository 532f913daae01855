//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the text front end, debugging
//! and tests. Rank 8 (row 0) is printed on top.

use crate::game_state::chess_types::*;
use crate::utils::fen_generator::piece_to_fen_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Unicode chess glyphs instead of FEN letters.
    pub unicode: bool,
    /// File letters and rank numbers around the board.
    pub coordinates: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            coordinates: true,
        }
    }
}

pub fn render_board(board: &Board, config: RenderConfig) -> String {
    let mut out = String::new();

    if config.coordinates {
        out.push_str("  a b c d e f g h\n");
    }

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        if config.coordinates {
            out.push(rank);
            out.push(' ');
        }

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|sq| board.piece_at(sq));
            out.push(match piece {
                Some(piece) if config.unicode => piece_to_unicode(piece),
                Some(piece) => piece_to_fen_char(piece),
                None if config.unicode => '·',
                None => '.',
            });

            if col < 7 {
                out.push(' ');
            }
        }

        if config.coordinates {
            out.push(' ');
            out.push(rank);
        }
        out.push('\n');
    }

    if config.coordinates {
        out.push_str("  a b c d e f g h");
    } else {
        out.pop();
    }

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
