//! Directional ray walking over the mailbox board.
//!
//! Every line-based rule (slider attacks, pins, blocked paths) is built on
//! `nearest_occupied`: step from a square along a unit vector and stop at the
//! first piece or at the board edge.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceCode, Square, EMPTY};

/// Unit step along a rank, file or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }

    /// Unit direction pointing from `from` to `to` when both lie on a common
    /// rank, file or diagonal. `None` for unaligned or identical squares.
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let d_row = i16::from(to.row) - i16::from(from.row);
        let d_col = i16::from(to.col) - i16::from(from.col);
        if d_row == 0 && d_col == 0 {
            return None;
        }
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return None;
        }
        Some(Direction::new(d_row.signum() as i8, d_col.signum() as i8))
    }
}

/// Number of steps from `origin` along `direction` before leaving the board.
///
/// A diagonal ray is bounded by whichever of its two edges is nearer.
pub fn steps_to_edge(origin: Square, direction: Direction) -> i8 {
    if !origin.is_on_board() {
        return 0;
    }
    let along = |pos: i8, step: i8| match step {
        1 => 7 - pos,
        -1 => pos,
        _ => i8::MAX,
    };
    let row_room = along(origin.row, direction.d_row);
    let col_room = along(origin.col, direction.d_col);
    let room = row_room.min(col_room);
    if room == i8::MAX {
        0
    } else {
        room
    }
}

/// Nearest occupied square along `direction` from `origin` (exclusive), with
/// its code. `None` if the ray leaves the board without meeting a piece.
pub fn nearest_occupied(
    board: &Board,
    origin: Square,
    direction: Direction,
) -> Option<(Square, PieceCode)> {
    let mut square = origin;
    for _ in 0..steps_to_edge(origin, direction) {
        square = Square::new(square.row + direction.d_row, square.col + direction.d_col);
        let code = board.at(square);
        if code != EMPTY {
            return Some((square, code));
        }
    }
    None
}

/// Code of the nearest piece along `direction` from `origin`, or `EMPTY`.
#[inline]
pub fn nearest_occupant(board: &Board, origin: Square, direction: Direction) -> PieceCode {
    nearest_occupied(board, origin, direction).map_or(EMPTY, |(_, code)| code)
}

/// First occupied square strictly between `from` and `to` on their common
/// line. `None` when the squares are unaligned or the path is clear.
pub fn first_blocker(board: &Board, from: Square, to: Square) -> Option<Square> {
    let direction = Direction::between(from, to)?;
    let (square, _) = nearest_occupied(board, from, direction)?;
    let reached = i16::from(square.row - from.row).abs().max(i16::from(square.col - from.col).abs());
    let target = i16::from(to.row - from.row).abs().max(i16::from(to.col - from.col).abs());
    (reached < target).then_some(square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn diagonal_ray_stops_at_nearer_edge() {
        assert_eq!(steps_to_edge(Square::new(1, 6), Direction::NORTH_EAST), 1);
        assert_eq!(steps_to_edge(Square::new(1, 6), Direction::SOUTH_WEST), 1);
        assert_eq!(steps_to_edge(Square::new(0, 0), Direction::NORTH_EAST), 7);
        assert_eq!(steps_to_edge(Square::new(3, 3), Direction::NORTH), 4);
        assert_eq!(steps_to_edge(Square::new(3, 3), Direction::WEST), 3);
    }

    #[test]
    fn nearest_occupant_on_starting_board() {
        let board = Board::starting();
        let e4 = Square::new(3, 4);
        assert_eq!(nearest_occupant(&board, e4, Direction::NORTH), -1);
        assert_eq!(nearest_occupant(&board, e4, Direction::SOUTH), 1);
        assert_eq!(nearest_occupant(&board, e4, Direction::EAST), 0);
        assert_eq!(nearest_occupant(&board, e4, Direction::NORTH_WEST), -1);
        assert_eq!(
            nearest_occupied(&board, Square::new(0, 4), Direction::WEST),
            Some((Square::new(0, 3), 5))
        );
    }

    #[test]
    fn empty_ray_returns_empty_code() {
        let mut board = Board::empty();
        board.set(Square::new(0, 0), crate::game_state::chess_types::PieceKind::King.code(Color::Light));
        assert_eq!(nearest_occupant(&board, Square::new(0, 0), Direction::NORTH_EAST), EMPTY);
        assert_eq!(nearest_occupant(&board, Square::new(0, 0), Direction::SOUTH), EMPTY);
    }

    #[test]
    fn blocker_search_only_looks_between_squares() {
        let board = Board::starting();
        assert_eq!(first_blocker(&board, Square::new(0, 0), Square::new(4, 0)), Some(Square::new(1, 0)));
        assert_eq!(first_blocker(&board, Square::new(1, 0), Square::new(6, 0)), None);
        assert_eq!(first_blocker(&board, Square::new(0, 1), Square::new(2, 2)), None);
    }

    #[test]
    fn direction_between_requires_alignment() {
        assert_eq!(
            Direction::between(Square::new(0, 0), Square::new(5, 5)),
            Some(Direction::NORTH_EAST)
        );
        assert_eq!(Direction::between(Square::new(0, 0), Square::new(2, 1)), None);
        assert_eq!(Direction::between(Square::new(4, 4), Square::new(4, 4)), None);
    }
}
