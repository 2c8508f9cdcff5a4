use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

/// Source of the legal moves for the side to move in a position.
///
/// `perft` is generic over this trait so an alternative generator can be
/// counted against the same published node totals as `LegalMoveGenerator`.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move>;
}
