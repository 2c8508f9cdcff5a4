//! Errors used throughout the rules engine.
//!
//! `IllegalMoveKind` classifies why a requested move was refused. It is a
//! domain answer, not a fault: a rejected move leaves the game untouched and
//! the caller decides what to do next. `ChessErrors` is the crate-wide error
//! that also covers notation parsing.

use thiserror::Error;

use crate::game_state::chess_types::{CastleWing, Color, PieceKind, Square};

/// Reason a move was rejected by the legality checker.
///
/// Each variant carries the squares involved so callers can explain the
/// rejection without re-running any rule logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveKind {
    /// Nothing stands on the origin square.
    #[error("there is no piece on {0}")]
    EmptyOrigin(Square),

    /// The origin piece belongs to the side that is not on move.
    #[error("the piece on {square} cannot move: it is {}'s turn", .side_to_move.name())]
    WrongTurn { square: Square, side_to_move: Color },

    /// The destination holds one of the mover's own pieces.
    #[error("{0} is occupied by one of the mover's own pieces")]
    DestinationOccupiedBySelf(Square),

    /// A coordinate lies outside the 8×8 board.
    #[error("{0} is outside the board")]
    OutOfBounds(Square),

    /// The geometry of the move does not fit the piece.
    #[error("a {piece:?} cannot move from {from} to {to}")]
    IllegalPieceMovement { piece: PieceKind, from: Square, to: Square },

    /// Another piece stands on the path or, for pawn pushes, on the destination.
    #[error("the path from {from} to {to} is blocked at {blocker}")]
    BlockedPath { from: Square, to: Square, blocker: Square },

    /// No castling right left for this wing, or the rook is missing.
    #[error("{color:?} cannot castle {wing:?}")]
    CastlingUnavailable { color: Color, wing: CastleWing },

    /// The king would start on, pass through or land on an attacked square.
    #[error("castling {wing:?} crosses attacked square {square}")]
    CastlingPathAttacked { wing: CastleWing, square: Square },

    /// After the move the mover's king would be attacked.
    #[error("moving from {from} to {to} leaves the own king in check")]
    ResultsInOwnCheck { from: Square, to: Square },

    /// A promoting pawn move lacks a valid promotion piece, or a non-promoting
    /// move names one.
    #[error("invalid promotion {promotion:?} for the move from {from} to {to}")]
    InvalidPromotion { from: Square, to: Square, promotion: Option<PieceKind> },
}

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveKind),

    /// The FEN record is structurally malformed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in coordinate notation failed to parse.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_name_the_squares() {
        let err = IllegalMoveKind::BlockedPath {
            from: Square::new(0, 0),
            to: Square::new(4, 0),
            blocker: Square::new(1, 0),
        };
        assert_eq!(err.to_string(), "the path from a1 to a5 is blocked at a2");

        let err = IllegalMoveKind::WrongTurn {
            square: Square::new(6, 4),
            side_to_move: Color::Light,
        };
        assert_eq!(err.to_string(), "the piece on e7 cannot move: it is white's turn");
    }

    #[test]
    fn illegal_move_converts_into_unified_error() {
        let err: ChessErrors = IllegalMoveKind::OutOfBounds(Square::new(9, 0)).into();
        assert!(matches!(
            err,
            ChessErrors::IllegalMove(IllegalMoveKind::OutOfBounds(_))
        ));
    }
}
