//! Full game-state value: placement plus every flag and counter the rules need.
//!
//! A `Position` is never mutated in place by the rules engine; each accepted
//! move produces a fresh value, so earlier positions stay valid to inspect.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// File of a pawn that just advanced two squares, capturable en passant
    /// on this move only.
    pub en_passant_file: Option<i8>,
    /// Plies since the last capture or pawn move.
    pub fifty_move_count: u16,
    pub ply_count: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Standard starting position.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::ALL,
            en_passant_file: None,
            fifty_move_count: 0,
            ply_count: 0,
        }
    }

    /// Position with `board` and `side_to_move`, no castling rights, no
    /// en-passant file and zeroed counters.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant_file: None,
            fifty_move_count: 0,
            ply_count: 0,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Whether the side to move has its king attacked.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    /// Full-move number as written in FEN (starts at 1, bumps after dark moves).
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.ply_count / 2 + 1
    }
}
