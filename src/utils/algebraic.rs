//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values reused by the FEN and long-algebraic helpers.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as "e4" to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(format!("invalid square: {square}")));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid rank: {}",
            rank as char
        )));
    }

    Ok(Square::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert an on-board square to its coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !square.is_on_board() {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "square out of bounds: {square}"
        )));
    }
    Ok(square.to_string())
}

#[inline]
pub fn file_to_char(file: i8) -> Option<char> {
    (0..8).contains(&file).then(|| char::from(b'a' + file as u8))
}
