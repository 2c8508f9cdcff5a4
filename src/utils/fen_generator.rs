use crate::game_state::board::Board;
use crate::game_state::chess_types::{piece_letter, CastlingRights, Color, Square};
use crate::game_state::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(&position.board);
    let side_to_move = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = generate_en_passant_field(position.en_passant_file, position.side_to_move);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.fifty_move_count,
        position.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8 {
            if let Some(ch) = piece_letter(board.at(Square::new(row, col))) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(ch);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.light.kingside {
        out.push('K');
    }
    if rights.light.queenside {
        out.push('Q');
    }
    if rights.dark.kingside {
        out.push('k');
    }
    if rights.dark.queenside {
        out.push('q');
    }

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

/// The target square sits behind the pawn that just double-stepped, so its
/// rank follows from whose turn it now is.
fn generate_en_passant_field(en_passant_file: Option<i8>, side_to_move: Color) -> String {
    en_passant_file
        .map(|col| Square::new(side_to_move.en_passant_row() + side_to_move.forward(), col))
        .filter(|square| square.is_on_board())
        .map_or_else(|| "-".to_owned(), |square| square.to_string())
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::position::Position;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn generate_starting_fen() {
        assert_eq!(generate_fen(&Position::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_custom_fen() {
        for fen in [
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w Kq c6 7 12",
            "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/8/8/8/8/8/8/8 w - - 100 40",
        ] {
            let position = parse_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&position), fen);
        }
    }
}
