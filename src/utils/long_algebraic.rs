//! Long algebraic move notation (`e2e4`, `e7e8q`).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// Split long algebraic text into origin, destination and promotion choice.
pub fn parse_long_algebraic(long_algebraic: &str) -> Result<(Square, Square, Option<PieceKind>), ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(promotion_from_char(ch)?),
    };

    Ok((from, to, promotion))
}

/// Build the request for `long_algebraic` against the piece currently on its origin.
///
/// No legality check happens here.
pub fn long_algebraic_to_move(long_algebraic: &str, position: &Position) -> Result<Move, ChessErrors> {
    let (from, to, promotion) = parse_long_algebraic(long_algebraic)?;
    Ok(Move::new(from, to, position.board.at(from), promotion))
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

fn promotion_from_char(ch: char) -> Result<PieceKind, ChessErrors> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidAlgebraic(format!("invalid promotion piece: {ch}"))),
    }
}
