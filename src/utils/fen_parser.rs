//! FEN-to-Position parser.
//!
//! Validates the six structural fields of a Forsyth-Edwards Notation record
//! and builds a `Position`. Piece placement is taken as given: a record with
//! a missing or extra king still parses.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::FIFTY_MOVE_LIMIT;
use crate::game_state::chess_types::{piece_from_letter, CastlingRights, Color, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

fn invalid(message: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_file = parse_en_passant_file(en_passant_part, side_to_move)?;

    let fifty_move_count = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?;
    if fifty_move_count > FIFTY_MOVE_LIMIT {
        return Err(invalid(format!(
            "halfmove clock must be between 0 and {FIFTY_MOVE_LIMIT}, got {fifty_move_count}"
        )));
    }

    let fullmove_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;
    if fullmove_number == 0 {
        return Err(invalid("fullmove number must be at least 1"));
    }
    let ply_count = (fullmove_number - 1)
        .saturating_mul(2)
        .saturating_add(u32::from(side_to_move == Color::Dark));

    Ok(Position {
        board,
        side_to_move,
        castling_rights,
        en_passant_file,
        fifty_move_count,
        ply_count,
    })
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as i8;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as i8;
                if col > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let code = piece_from_letter(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set(Square::new(row, col), code);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light.kingside = true,
            'Q' => rights.light.queenside = true,
            'k' => rights.dark.kingside = true,
            'q' => rights.dark.queenside = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// Target square behind a pawn that just double-stepped. Only its file is kept;
/// the rank must match the side that just moved.
fn parse_en_passant_file(en_passant_part: &str, side_to_move: Color) -> Result<Option<i8>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;
    let expected_row = side_to_move.en_passant_row() + side_to_move.forward();
    if square.row != expected_row {
        return Err(invalid(format!(
            "en-passant square {en_passant_part} is not on the expected rank"
        )));
    }

    Ok(Some(square.col))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position, Position::new_game());
        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.castling_rights, CastlingRights::ALL);
        assert_eq!(position.ply_count, 0);
        assert_eq!(position.fifty_move_count, 0);
    }

    #[test]
    fn parse_custom_fields() {
        let position = parse_fen("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w Kq c6 7 12")
            .expect("custom FEN should parse");
        assert_eq!(position.en_passant_file, Some(2));
        assert!(position.castling_rights.light.kingside);
        assert!(!position.castling_rights.light.queenside);
        assert!(!position.castling_rights.dark.kingside);
        assert!(position.castling_rights.dark.queenside);
        assert_eq!(position.fifty_move_count, 7);
        assert_eq!(position.ply_count, 22);
        assert_eq!(position.board.at(Square::new(4, 2)), -1);

        let dark = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("dark FEN should parse");
        assert_eq!(dark.ply_count, 1);
        assert_eq!(dark.en_passant_file, Some(4));
    }

    #[test]
    fn rejects_structural_errors() {
        let cases = [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/9 w - - 0 1",
            "8/8/8/8/8/8/8/7 w - - 0 1",
            "8/8/8/8/8/8/8/ppppppppp w - - 0 1",
            "8/8/8/8/8/8/8/7x w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w KX - 0 1",
            "8/8/8/8/8/8/8/8 w - e4 0 1",
            "8/8/8/8/8/8/8/8 w - e3 0 1",
            "8/8/8/8/8/8/8/8 w - - 101 1",
            "8/8/8/8/8/8/8/8 w - - -1 1",
            "8/8/8/8/8/8/8/8 w - - 0 0",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
        ];
        for fen in cases {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "expected rejection for {fen:?}"
            );
        }
    }

    #[test]
    fn accepts_positions_without_kings() {
        let position = parse_fen("8/8/8/8/8/8/8/8 w - - 100 1").expect("empty board should parse");
        assert_eq!(position.fifty_move_count, 100);
    }
}
