//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the fifty-move limit.

use crate::game_state::chess_types::PieceCode;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u16 = 100;

/// King column on both home rows.
pub const KING_HOME_COL: i8 = 4;

/// Light back rank from file a to file h; the dark back rank mirrors it with negated codes.
pub const BACK_RANK: [PieceCode; 8] = [4, 2, 3, 5, 6, 3, 2, 4];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];
