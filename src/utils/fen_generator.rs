use crate::game_state::{chess_types::*, game_state::GameState};

/// Six-field FEN. Castling and en-passant are always `-`.
pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} - - {} {}",
        generate_board_field(game_state.board()),
        side_to_move,
        game_state.halfmove_clock(),
        game_state.history().current_move_number()
    )
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|sq| board.piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn fen_tracks_moves_and_move_number() {
        let mut game = GameState::new_game();
        let e2 = algebraic_to_square("e2").expect("e2");
        let e4 = algebraic_to_square("e4").expect("e4");
        let c7 = algebraic_to_square("c7").expect("c7");
        let c5 = algebraic_to_square("c5").expect("c5");

        game.attempt_move(e2, e4).expect("e2-e4 is legal");
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );

        game.attempt_move(c7, c5).expect("c7-c5 is legal");
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 2"
        );
    }

    #[test]
    fn move_counters_survive_a_round_trip() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 3 17";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&game), fen);
    }

    #[test]
    fn parsed_position_is_written_back() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&game), fen);
    }
}
