//! Absolute pin detection along the king's line through the moving piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{decode_piece, Color, PieceKind, Square};
use crate::move_generation::legal_move_checks::king_square;
use crate::move_generation::ray_scanner::{nearest_occupied, Direction};

/// Square of the enemy slider pinning the piece on `origin` to its king, if any.
///
/// Only the single line from the own king through `origin` is scanned.
pub fn pinning_piece(board: &Board, origin: Square) -> Option<Square> {
    let (color, kind) = decode_piece(board.get(origin)?)?;
    if kind == PieceKind::King {
        return None;
    }
    let king = king_square(board, color)?;
    let direction = Direction::between(king, origin)?;

    // Nothing may stand between the king and the piece.
    let (first, _) = nearest_occupied(board, king, direction)?;
    if first != origin {
        return None;
    }

    let (beyond, code) = nearest_occupied(board, origin, direction)?;
    is_slider_on_line(code, color.opposite(), direction).then_some(beyond)
}

/// Whether moving the piece on `origin` to `destination` steps off the line
/// along which it is absolutely pinned.
///
/// Staying between king and pinner, or capturing the pinner, keeps the pin
/// intact and is allowed.
pub fn breaks_absolute_pin(board: &Board, origin: Square, destination: Square) -> bool {
    let Some(pinner) = pinning_piece(board, origin) else {
        return false;
    };
    let Some(color) = board.get(origin).and_then(Color::of_code) else {
        return false;
    };
    let Some(king) = king_square(board, color) else {
        return false;
    };
    !stays_on_segment(king, pinner, destination)
}

fn is_slider_on_line(code: i8, attacker: Color, direction: Direction) -> bool {
    match decode_piece(code) {
        Some((color, kind)) if color == attacker => match kind {
            PieceKind::Queen => true,
            PieceKind::Rook => direction.is_orthogonal(),
            PieceKind::Bishop => direction.is_diagonal(),
            _ => false,
        },
        _ => false,
    }
}

/// Whether `square` lies on the segment from `king` (exclusive) to `pinner` (inclusive).
fn stays_on_segment(king: Square, pinner: Square, square: Square) -> bool {
    if Direction::between(king, square) != Direction::between(king, pinner) {
        return false;
    }
    king.distance(square) <= king.distance(pinner)
}
