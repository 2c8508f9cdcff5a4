//! Legal move enumeration.
//!
//! Every own piece is paired with every destination (and every promotion
//! choice where a pawn reaches its last rank); the legality checker decides
//! which requests survive. Terminal-status evaluation relies on the
//! short-circuiting `has_legal_move`.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::{decode_piece, Move, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_validation::is_legal_move;
use crate::move_generation::move_generator::MoveGenerator;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move> {
        generate_legal_moves(position)
    }
}

/// Every request worth asking about for the piece on `from`.
fn candidate_moves_from(position: &Position, from: Square) -> impl Iterator<Item = Move> + '_ {
    let code = position.board.at(from);
    let promotion_row = decode_piece(code)
        .filter(|&(_, kind)| kind == PieceKind::Pawn)
        .map(|(color, _)| color.promotion_row());

    Square::all().flat_map(move |to| {
        let promoting = Some(to.row) == promotion_row;
        PieceKind::PROMOTIONS
            .into_iter()
            .map(Some)
            .filter(move |_| promoting)
            .chain((!promoting).then_some(None))
            .map(move |promotion| Move::new(from, to, code, promotion))
    })
}

fn candidate_moves(position: &Position) -> impl Iterator<Item = Move> + '_ {
    position
        .board
        .pieces_of(position.side_to_move)
        .flat_map(move |(from, _)| candidate_moves_from(position, from))
}

pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    candidate_moves(position)
        .filter(|mv| is_legal_move(position, mv))
        .collect()
}

/// Legal moves of the piece standing on `from`. Empty if it is not the mover's piece.
pub fn legal_moves_from(position: &Position, from: Square) -> Vec<Move> {
    if !from.is_on_board() {
        return Vec::new();
    }
    candidate_moves_from(position, from)
        .filter(|mv| is_legal_move(position, mv))
        .collect()
}

pub fn has_legal_move(position: &Position) -> bool {
    candidate_moves(position).any(|mv| is_legal_move(position, &mv))
}

/// Uniformly chosen legal move, or `None` when the side to move has none.
pub fn choose_random_legal_move<R: Rng + ?Sized>(position: &Position, rng: &mut R) -> Option<Move> {
    generate_legal_moves(position).choose(rng).copied()
}
