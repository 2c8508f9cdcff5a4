//! Perft: count leaf nodes of the legal move tree to a fixed depth.
//!
//! Node counts for well-known positions are published, which makes perft
//! the standard end-to-end check of a legality engine.

use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{apply_move, place_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft_legal(position: &Position, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, position, depth)
}

pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position) {
        if depth == 1 {
            let placement = place_move(position, &mv);
            let next = apply_move(position, &mv);
            total.nodes += 1;
            total.captures += usize::from(placement.captured.is_some());
            total.en_passant += usize::from(placement.en_passant);
            total.castles += usize::from(placement.castled.is_some());
            total.promotions += usize::from(placement.promoted.is_some());
            total.checks += usize::from(next.is_in_check());
        } else {
            let next = apply_move(position, &mv);
            total.merge(perft(generator, &next, depth - 1));
        }
    }
    total
}

/// Node count below each root move, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    LegalMoveGenerator
        .generate_legal_moves(position)
        .into_iter()
        .map(|mv| {
            let next = apply_move(position, &mv);
            (mv.to_string(), perft_legal(&next, depth - 1).nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    fn counts(fen: &str, depth: u8) -> PerftCounts {
        let position = Position::from_fen(fen).expect("perft FEN should parse");
        perft_legal(&position, depth)
    }

    #[test]
    fn startpos_node_counts() {
        assert_eq!(counts(STARTING_POSITION_FEN, 1).nodes, 20);
        let depth_two = counts(STARTING_POSITION_FEN, 2);
        assert_eq!(depth_two.nodes, 400);
        assert_eq!(depth_two.captures, 0);
        assert_eq!(depth_two.checks, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_pins_and_promotions() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let depth_one = counts(fen, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = counts(fen, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn rook_endgame_exercises_en_passant_discoveries() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(counts(fen, 1).nodes, 14);
        assert_eq!(counts(fen, 2).nodes, 191);
        let depth_three = counts(fen, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn mirrored_promotion_position() {
        let fen = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
        assert_eq!(counts(fen, 1).nodes, 6);
        assert_eq!(counts(fen, 2).nodes, 264);
    }

    #[test]
    fn perft_accepts_a_generator_trait_object() {
        let generator: &dyn MoveGenerator = &LegalMoveGenerator;
        let start = Position::new_game();
        assert_eq!(perft(generator, &start, 2), perft_legal(&start, 2));
    }

    #[test]
    fn divide_sums_to_perft() {
        let start = Position::new_game();
        let divided = perft_divide(&start, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
