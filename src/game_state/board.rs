//! 8×8 grid of signed piece codes.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, PieceCode, PieceKind, Square, EMPTY};

/// Piece placement, indexed `[row][col]` with row 0 = rank 1 and col 0 = file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[PieceCode; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[EMPTY; 8]; 8],
        }
    }

    pub fn starting() -> Self {
        let mut squares = [[EMPTY; 8]; 8];
        squares[0] = BACK_RANK;
        squares[1] = [PieceKind::Pawn.code(Color::Light); 8];
        squares[6] = [PieceKind::Pawn.code(Color::Dark); 8];
        squares[7] = BACK_RANK.map(|code| -code);
        Self { squares }
    }

    #[inline]
    pub const fn from_rows(squares: [[PieceCode; 8]; 8]) -> Self {
        Self { squares }
    }

    #[inline]
    pub const fn rows(&self) -> &[[PieceCode; 8]; 8] {
        &self.squares
    }

    /// Code on `square`, or `None` when the square is off the board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<PieceCode> {
        if square.is_on_board() {
            Some(self.squares[square.row as usize][square.col as usize])
        } else {
            None
        }
    }

    /// Code on `square`, treating off-board squares as empty.
    #[inline]
    pub fn at(&self, square: Square) -> PieceCode {
        self.get(square).unwrap_or(EMPTY)
    }

    /// Writes `code` to `square`. Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, code: PieceCode) {
        if square.is_on_board() {
            self.squares[square.row as usize][square.col as usize] = code;
        }
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.at(square) == EMPTY
    }

    /// Squares holding a piece of `color`, with their codes.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceCode)> + '_ {
        Square::all().filter_map(move |square| {
            let code = self.at(square);
            (Color::of_code(code) == Some(color)).then_some((square, code))
        })
    }

    /// First square holding `code`, scanning a1..h8.
    pub fn find(&self, code: PieceCode) -> Option<Square> {
        Square::all().find(|&square| self.at(square) == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_matches_standard_layout() {
        let board = Board::starting();
        assert_eq!(board.at(Square::new(0, 4)), 6);
        assert_eq!(board.at(Square::new(7, 4)), -6);
        assert_eq!(board.at(Square::new(0, 3)), 5);
        assert_eq!(board.at(Square::new(6, 0)), -1);
        assert_eq!(board.pieces_of(Color::Light).count(), 16);
        assert_eq!(board.pieces_of(Color::Dark).count(), 16);
    }

    #[test]
    fn rows_are_indexed_rank_then_file() {
        let mut rows = [[EMPTY; 8]; 8];
        rows[0][4] = PieceKind::King.code(Color::Light);
        rows[7][4] = PieceKind::King.code(Color::Dark);
        let board = Board::from_rows(rows);
        assert_eq!(board.find(6), Some(Square::new(0, 4)));
        assert_eq!(board.find(-6), Some(Square::new(7, 4)));
        assert_eq!(board.rows(), &rows);
        assert_eq!(Board::from_rows(*Board::starting().rows()), Board::starting());
    }

    #[test]
    fn off_board_access_is_harmless() {
        let mut board = Board::empty();
        assert_eq!(board.get(Square::new(8, 8)), None);
        board.set(Square::new(-1, 3), 6);
        assert_eq!(board, Board::empty());
    }
}
