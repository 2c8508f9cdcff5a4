//! State transition: produce the next position from an accepted move, and
//! decide whether that position ends the game.

use tracing::{info, trace};

use crate::chess_errors::IllegalMoveKind;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, KING_HOME_COL};
use crate::game_state::chess_types::{
    decode_piece, CastleWing, CastlingRights, Color, GameStatus, Move, PieceCode, PieceKind,
    Square, EMPTY,
};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::move_generation::legal_move_validation::validate_move;

/// Board after relocating pieces for `mv`, plus what the relocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub board: Board,
    /// Square and code of a captured piece. For en passant the square is
    /// the victim's, not the destination.
    pub captured: Option<(Square, PieceCode)>,
    pub castled: Option<CastleWing>,
    pub en_passant: bool,
    pub promoted: Option<PieceKind>,
}

/// Whether a pawn moving `from` -> `to` captures en passant in `position`.
pub fn is_en_passant_capture(position: &Position, from: Square, to: Square) -> bool {
    let board = &position.board;
    let Some((color, PieceKind::Pawn)) = decode_piece(board.at(from)) else {
        return false;
    };
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    position.en_passant_file == Some(to.col)
        && from.row == color.en_passant_row()
        && to.row == from.row + color.forward()
        && (i16::from(to.col) - i16::from(from.col)).abs() == 1
        && board.is_empty_at(to)
        && board.at(Square::new(from.row, to.col)) == PieceKind::Pawn.code(color.opposite())
}

/// Relocates pieces for `mv` without touching any other part of the state.
///
/// Assumes `mv` has been validated; used both for the real transition and
/// for simulating a candidate move during legality checks.
pub fn place_move(position: &Position, mv: &Move) -> Placement {
    let mut board = position.board;
    let code = board.at(mv.from);
    let on_board = mv.from.is_on_board() && mv.to.is_on_board();
    let Some((color, kind)) = decode_piece(code).filter(|_| on_board) else {
        return Placement {
            board,
            captured: None,
            castled: None,
            en_passant: false,
            promoted: None,
        };
    };

    let en_passant = kind == PieceKind::Pawn && is_en_passant_capture(position, mv.from, mv.to);
    let captured = if en_passant {
        let victim = Square::new(mv.from.row, mv.to.col);
        let victim_code = board.at(victim);
        board.set(victim, EMPTY);
        Some((victim, victim_code))
    } else {
        let target = board.at(mv.to);
        (target != EMPTY).then_some((mv.to, target))
    };

    let promoted = match mv.promotion {
        Some(piece) if kind == PieceKind::Pawn && mv.to.row == color.promotion_row() => Some(piece),
        _ => None,
    };

    board.set(mv.from, EMPTY);
    board.set(mv.to, promoted.map_or(code, |piece| piece.code(color)));

    let castled = castling_wing(kind, mv.from, mv.to);
    if let Some(wing) = castled {
        let row = mv.from.row;
        let rook = board.at(Square::new(row, wing.rook_col()));
        board.set(Square::new(row, wing.rook_col()), EMPTY);
        board.set(Square::new(row, wing.rook_destination_col()), rook);
    }

    Placement {
        board,
        captured,
        castled,
        en_passant,
        promoted,
    }
}

fn castling_wing(kind: PieceKind, from: Square, to: Square) -> Option<CastleWing> {
    if kind != PieceKind::King || from.col != KING_HOME_COL || from.row != to.row {
        return None;
    }
    match i16::from(to.col) - i16::from(from.col) {
        2 => Some(CastleWing::Kingside),
        -2 => Some(CastleWing::Queenside),
        _ => None,
    }
}

/// Next position after the validated move `mv`. A move with an off-board
/// square returns the position unchanged.
pub fn apply_move(position: &Position, mv: &Move) -> Position {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return *position;
    }
    let placement = place_move(position, mv);
    let Some((color, kind)) = decode_piece(position.board.at(mv.from)) else {
        return *position;
    };

    let mut next = *position;
    next.board = placement.board;

    update_castling_rights(&mut next.castling_rights, color, kind, mv.from, mv.to);

    next.en_passant_file = if kind == PieceKind::Pawn && (mv.to.row - mv.from.row).abs() == 2 {
        Some(mv.from.col)
    } else {
        None
    };

    if kind == PieceKind::Pawn || placement.captured.is_some() {
        next.fifty_move_count = 0;
    } else {
        next.fifty_move_count = next.fifty_move_count.saturating_add(1);
    }

    next.ply_count = next.ply_count.saturating_add(1);
    next.side_to_move = color.opposite();

    trace!(
        mv = %mv,
        captured = ?placement.captured,
        castled = ?placement.castled,
        fifty_move_count = next.fifty_move_count,
        "applied move"
    );

    next
}

/// Rights only ever shrink: a king move drops both of its side's flags, and
/// any move from or onto a rook corner drops the flag tied to that corner.
fn update_castling_rights(
    rights: &mut CastlingRights,
    mover: Color,
    kind: PieceKind,
    from: Square,
    to: Square,
) {
    if kind == PieceKind::King {
        *rights.side_mut(mover) = Default::default();
    }

    for square in [from, to] {
        for color in [Color::Light, Color::Dark] {
            if square.row != color.home_row() {
                continue;
            }
            for wing in [CastleWing::Kingside, CastleWing::Queenside] {
                if square.col == wing.rook_col() {
                    rights.side_mut(color).revoke(wing);
                }
            }
        }
    }
}

/// Terminal status of `position` from the point of view of its side to move.
///
/// Having no legal move decides the game before the fifty-move counter is
/// consulted, so a mate delivered on the hundredth quiet ply stands.
pub fn evaluate_status(position: &Position) -> GameStatus {
    if !has_legal_move(position) {
        return if position.is_in_check() {
            GameStatus::Checkmate {
                winner: position.side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if position.fifty_move_count >= FIFTY_MOVE_LIMIT {
        return GameStatus::FiftyMoveDraw;
    }
    GameStatus::InProgress
}

/// Validate, apply and evaluate in one step.
pub fn advance(position: &Position, mv: &Move) -> Result<(Position, GameStatus), IllegalMoveKind> {
    validate_move(position, mv)?;
    let next = apply_move(position, mv);
    let status = evaluate_status(&next);
    if status.is_over() {
        info!(?status, ply = next.ply_count, "game reached a terminal status");
    }
    Ok((next, status))
}
