//! Move legality checking.
//!
//! `validate_move` runs the rule checks in a fixed order and stops at the
//! first failure, so every rejection maps to exactly one `IllegalMoveKind`:
//!
//! 1. both squares on the board,
//! 2. a piece on the origin,
//! 3. that piece belongs to the side to move,
//! 4. the destination is not held by the mover's own piece,
//! 5. the geometry fits the piece (including pawn pushes, en passant and
//!    castling preconditions) and the path is clear,
//! 6. promotion is given exactly when a pawn reaches its last rank,
//! 7. the mover's king is not attacked afterwards.

use crate::chess_errors::IllegalMoveKind;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::{decode_piece, CastleWing, Color, Move, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{is_en_passant_capture, place_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::pin_detector::breaks_absolute_pin;
use crate::move_generation::ray_scanner::{first_blocker, Direction};

/// Accepts `mv` if it is legal in `position`, otherwise names the first rule it breaks.
pub fn validate_move(position: &Position, mv: &Move) -> Result<(), IllegalMoveKind> {
    let (from, to) = (mv.from, mv.to);

    // Off-board squares cannot be inspected, so bounds come first.
    for square in [from, to] {
        if !square.is_on_board() {
            return Err(IllegalMoveKind::OutOfBounds(square));
        }
    }

    let board = &position.board;
    let code = board.at(from);
    let Some((color, kind)) = decode_piece(code) else {
        return Err(IllegalMoveKind::EmptyOrigin(from));
    };

    if color != position.side_to_move {
        return Err(IllegalMoveKind::WrongTurn {
            square: from,
            side_to_move: position.side_to_move,
        });
    }

    if Color::of_code(board.at(to)) == Some(color) {
        return Err(IllegalMoveKind::DestinationOccupiedBySelf(to));
    }

    if mv.piece != code {
        return Err(IllegalMoveKind::IllegalPieceMovement { piece: kind, from, to });
    }

    match kind {
        PieceKind::Pawn => check_pawn_movement(position, color, from, to)?,
        PieceKind::Knight => check_knight_movement(from, to)?,
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            check_slider_movement(board, kind, from, to)?
        }
        PieceKind::King => check_king_movement(position, color, from, to)?,
    }

    check_promotion(mv, color, kind)?;
    check_own_king_safety(position, mv, color, kind)
}

/// Convenience wrapper over `validate_move`.
#[inline]
pub fn is_legal_move(position: &Position, mv: &Move) -> bool {
    validate_move(position, mv).is_ok()
}

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (to.row - from.row, to.col - from.col)
}

fn check_pawn_movement(
    position: &Position,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), IllegalMoveKind> {
    let board = &position.board;
    let forward = color.forward();
    let (d_row, d_col) = deltas(from, to);
    let illegal = IllegalMoveKind::IllegalPieceMovement {
        piece: PieceKind::Pawn,
        from,
        to,
    };

    if d_col == 0 {
        if d_row == forward {
            if !board.is_empty_at(to) {
                return Err(IllegalMoveKind::BlockedPath { from, to, blocker: to });
            }
            return Ok(());
        }
        if d_row == 2 * forward && from.row == color.pawn_start_row() {
            let middle = Square::new(from.row + forward, from.col);
            for square in [middle, to] {
                if !board.is_empty_at(square) {
                    return Err(IllegalMoveKind::BlockedPath { from, to, blocker: square });
                }
            }
            return Ok(());
        }
        return Err(illegal);
    }

    if d_col.abs() == 1 && d_row == forward {
        if Color::of_code(board.at(to)) == Some(color.opposite()) {
            return Ok(());
        }
        if is_en_passant_capture(position, from, to) {
            return Ok(());
        }
    }

    Err(illegal)
}

fn check_knight_movement(from: Square, to: Square) -> Result<(), IllegalMoveKind> {
    let (d_row, d_col) = deltas(from, to);
    match (d_row.abs(), d_col.abs()) {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(IllegalMoveKind::IllegalPieceMovement {
            piece: PieceKind::Knight,
            from,
            to,
        }),
    }
}

fn check_slider_movement(
    board: &Board,
    kind: PieceKind,
    from: Square,
    to: Square,
) -> Result<(), IllegalMoveKind> {
    let allowed = match Direction::between(from, to) {
        Some(direction) => match kind {
            PieceKind::Bishop => direction.is_diagonal(),
            PieceKind::Rook => direction.is_orthogonal(),
            _ => true,
        },
        None => false,
    };
    if !allowed {
        return Err(IllegalMoveKind::IllegalPieceMovement { piece: kind, from, to });
    }

    match first_blocker(board, from, to) {
        Some(blocker) => Err(IllegalMoveKind::BlockedPath { from, to, blocker }),
        None => Ok(()),
    }
}

fn check_king_movement(
    position: &Position,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), IllegalMoveKind> {
    if from.distance(to) == 1 {
        return Ok(());
    }
    let (d_row, d_col) = deltas(from, to);
    if d_row == 0 && d_col.abs() == 2 && from == Square::new(color.home_row(), KING_HOME_COL) {
        return check_castling(position, color, from, to).map(|_| ());
    }
    Err(IllegalMoveKind::IllegalPieceMovement {
        piece: PieceKind::King,
        from,
        to,
    })
}

/// Castling preconditions: right still held, rook at home, nothing between
/// king and rook, and no attacked square on the king's route.
fn check_castling(
    position: &Position,
    color: Color,
    from: Square,
    to: Square,
) -> Result<CastleWing, IllegalMoveKind> {
    let board = &position.board;
    let wing = if to.col > from.col {
        CastleWing::Kingside
    } else {
        CastleWing::Queenside
    };

    let rook_home = Square::new(from.row, wing.rook_col());
    if !position.castling_rights.allows(color, wing)
        || board.at(rook_home) != PieceKind::Rook.code(color)
    {
        return Err(IllegalMoveKind::CastlingUnavailable { color, wing });
    }

    if let Some(blocker) = first_blocker(board, from, rook_home) {
        return Err(IllegalMoveKind::BlockedPath { from, to, blocker });
    }

    let step = (to.col - from.col).signum();
    let route = [from, Square::new(from.row, from.col + step), to];
    if let Some(&square) = route
        .iter()
        .find(|&&square| is_square_attacked(board, square, color.opposite()))
    {
        return Err(IllegalMoveKind::CastlingPathAttacked { wing, square });
    }

    Ok(wing)
}

fn check_promotion(mv: &Move, color: Color, kind: PieceKind) -> Result<(), IllegalMoveKind> {
    let promoting = kind == PieceKind::Pawn && mv.to.row == color.promotion_row();
    let valid = match mv.promotion {
        Some(piece) => promoting && piece.is_promotion_target(),
        None => !promoting,
    };
    if valid {
        Ok(())
    } else {
        Err(IllegalMoveKind::InvalidPromotion {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        })
    }
}

/// Pin check first as a cheap early exit, then the full answer from the
/// board as it would stand after the move.
fn check_own_king_safety(
    position: &Position,
    mv: &Move,
    color: Color,
    kind: PieceKind,
) -> Result<(), IllegalMoveKind> {
    let own_check = IllegalMoveKind::ResultsInOwnCheck {
        from: mv.from,
        to: mv.to,
    };

    if kind != PieceKind::King && breaks_absolute_pin(&position.board, mv.from, mv.to) {
        return Err(own_check);
    }

    let after = place_move(position, mv).board;
    if is_king_in_check(&after, color) {
        return Err(own_check);
    }
    Ok(())
}
