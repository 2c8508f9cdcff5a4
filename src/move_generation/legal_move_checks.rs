//! Attack detection: can a side capture on a given square right now?
//!
//! Answers purely from piece geometry. Pins and checks of the attacking side
//! are ignored, so a pinned piece still attacks.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{decode_piece, Color, PieceKind, Square};
use crate::move_generation::ray_scanner::{nearest_occupied, Direction};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find(PieceKind::King.code(color))
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether any piece of `attacker` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    if !square.is_on_board() {
        return false;
    }
    is_attacked_by_knight(board, square, attacker)
        || is_attacked_orthogonally(board, square, attacker)
        || is_attacked_diagonally(board, square, attacker)
}

fn is_attacked_by_knight(board: &Board, square: Square, attacker: Color) -> bool {
    let knight = PieceKind::Knight.code(attacker);
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .any(|from| board.at(from) == knight)
}

fn is_attacked_orthogonally(board: &Board, square: Square, attacker: Color) -> bool {
    Direction::ORTHOGONAL.iter().any(|&direction| {
        let Some((from, code)) = nearest_occupied(board, square, direction) else {
            return false;
        };
        match decode_piece(code) {
            Some((color, kind)) if color == attacker => match kind {
                PieceKind::Rook | PieceKind::Queen => true,
                PieceKind::King => from.distance(square) == 1,
                _ => false,
            },
            _ => false,
        }
    })
}

fn is_attacked_diagonally(board: &Board, square: Square, attacker: Color) -> bool {
    // A pawn attacks forward-diagonally, so seen from the target it sits one
    // step back along the attacker's direction of travel.
    let pawn_row_step = -attacker.forward();

    Direction::DIAGONAL.iter().any(|&direction| {
        let Some((from, code)) = nearest_occupied(board, square, direction) else {
            return false;
        };
        match decode_piece(code) {
            Some((color, kind)) if color == attacker => match kind {
                PieceKind::Bishop | PieceKind::Queen => true,
                PieceKind::King => from.distance(square) == 1,
                PieceKind::Pawn => direction.d_row == pawn_row_step && from.distance(square) == 1,
                _ => false,
            },
            _ => false,
        }
    })
}
