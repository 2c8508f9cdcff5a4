//! Outward-facing game session.
//!
//! A `Game` owns exactly one current `Position`. Moves are validated against
//! it, and only an accepted move replaces it; a rejection leaves every field
//! untouched.

use tracing::debug;

use crate::chess_errors::{ChessErrors, IllegalMoveKind};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, GameStatus, Move, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{advance, evaluate_status};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Game from the standard starting position.
    pub fn new() -> Self {
        Self {
            position: Position::new_game(),
            status: GameStatus::InProgress,
        }
    }

    /// Game from an arbitrary position; its status is evaluated up front so a
    /// position that is already mate or drawn starts over.
    pub fn from_position(position: Position) -> Self {
        let status = evaluate_status(&position);
        Self { position, status }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Play `origin` -> `destination` for the side to move.
    ///
    /// Returns `Ok(None)` while the game continues and `Ok(Some(score))` once it
    /// has ended (`+1` light won, `-1` dark won, `0` draw). After the end every
    /// call returns the stored score without looking at the move.
    pub fn make_move(
        &mut self,
        origin: Square,
        destination: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Option<i8>, IllegalMoveKind> {
        if let Some(score) = self.status.score() {
            return Ok(Some(score));
        }

        let mv = Move::new(origin, destination, self.position.board.at(origin), promotion);
        self.play(&mv)
    }

    /// Play an already-built move request, e.g. one parsed from long algebraic.
    pub fn play(&mut self, mv: &Move) -> Result<Option<i8>, IllegalMoveKind> {
        if let Some(score) = self.status.score() {
            return Ok(Some(score));
        }

        match advance(&self.position, mv) {
            Ok((next, status)) => {
                debug!(from = %mv.from, to = %mv.to, ply = next.ply_count, "move accepted");
                self.position = next;
                self.status = status;
                Ok(status.score())
            }
            Err(reason) => {
                debug!(from = %mv.from, to = %mv.to, %reason, "move rejected");
                Err(reason)
            }
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling_rights
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<i8> {
        self.position.en_passant_file
    }

    #[inline]
    pub fn fifty_move_count(&self) -> u16 {
        self.position.fifty_move_count
    }

    #[inline]
    pub fn ply_count(&self) -> u32 {
        self.position.ply_count
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Terminal score, `0` while the game is still in progress.
    #[inline]
    pub fn score(&self) -> i8 {
        self.status.score().unwrap_or(0)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        generate_legal_moves(&self.position)
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }
}
