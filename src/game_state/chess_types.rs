//! Primitive value types shared by every part of the rules engine.
//!
//! Pieces live on the board as signed codes (`+` light, `-` dark, magnitude
//! 1..=6 for pawn..king, `0` for empty). `Color` and `PieceKind` are the typed
//! views used by the legality logic.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::position::Position;

/// Signed piece code as stored on the board.
pub type PieceCode = i8;

pub const EMPTY: PieceCode = 0;

/// Side to move. Light moves up the board (towards row 7), dark moves down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Sign used for this side's piece codes.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row delta of a pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        self.sign()
    }

    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row a pawn of this side must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Color::Light => 4,
            Color::Dark => 3,
        }
    }

    /// Color owning a non-empty piece code.
    #[inline]
    pub const fn of_code(code: PieceCode) -> Option<Self> {
        if code > 0 {
            Some(Color::Light)
        } else if code < 0 {
            Some(Color::Dark)
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "white",
            Color::Dark => "black",
        }
    }
}

/// Piece kind (color is carried separately by `Color` or the code's sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Unsigned magnitude used in piece codes.
    #[inline]
    pub const fn magnitude(self) -> i8 {
        self.index() as i8 + 1
    }

    #[inline]
    pub const fn from_code(code: PieceCode) -> Option<Self> {
        match code.unsigned_abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self, color: Color) -> PieceCode {
        self.magnitude() * color.sign()
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Split a piece code into its side and kind. `None` for empty or invalid codes.
#[inline]
pub const fn decode_piece(code: PieceCode) -> Option<(Color, PieceKind)> {
    match (Color::of_code(code), PieceKind::from_code(code)) {
        (Some(color), Some(kind)) => Some((color, kind)),
        _ => None,
    }
}

pub fn piece_name(code: PieceCode) -> Option<&'static str> {
    let kind = PieceKind::from_code(code)?;
    Some(match kind {
        PieceKind::Pawn => "pawn",
        PieceKind::Knight => "knight",
        PieceKind::Bishop => "bishop",
        PieceKind::Rook => "rook",
        PieceKind::Queen => "queen",
        PieceKind::King => "king",
    })
}

/// FEN-style letter: uppercase for light pieces, lowercase for dark.
pub fn piece_letter(code: PieceCode) -> Option<char> {
    let (color, kind) = decode_piece(code)?;
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    Some(match color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    })
}

pub fn piece_from_letter(ch: char) -> Option<PieceCode> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(kind.code(color))
}

pub fn piece_symbol(code: PieceCode) -> Option<char> {
    Some(match decode_piece(code)? {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    })
}

/// Board coordinate. Row 0 is rank 1, column 0 is file a.
///
/// Coordinates are signed so that caller-supplied off-board squares can be
/// represented and rejected instead of causing a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Square displaced by `(d_row, d_col)`, if it stays on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let next = Square::new(self.row.checked_add(d_row)?, self.col.checked_add(d_col)?);
        next.is_on_board().then_some(next)
    }

    /// Chebyshev (king-step) distance.
    #[inline]
    pub fn distance(self, other: Square) -> i8 {
        let d_row = (i16::from(self.row) - i16::from(other.row)).abs();
        let d_col = (i16::from(self.col) - i16::from(other.col)).abs();
        d_row.max(d_col).min(i16::from(i8::MAX)) as i8
    }

    /// All 64 squares, a1..h1, a2..h2, ..., a8..h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                char::from(b'a' + self.col as u8),
                char::from(b'1' + self.row as u8)
            )
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleWing {
    Kingside,
    Queenside,
}

impl CastleWing {
    #[inline]
    pub const fn rook_col(self) -> i8 {
        match self {
            CastleWing::Kingside => 7,
            CastleWing::Queenside => 0,
        }
    }

    #[inline]
    pub const fn king_destination_col(self) -> i8 {
        match self {
            CastleWing::Kingside => 6,
            CastleWing::Queenside => 2,
        }
    }

    #[inline]
    pub const fn rook_destination_col(self) -> i8 {
        match self {
            CastleWing::Kingside => 5,
            CastleWing::Queenside => 3,
        }
    }
}

/// Castling permissions of one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SideCastling {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideCastling {
    pub const ALL: SideCastling = SideCastling {
        kingside: true,
        queenside: true,
    };
    pub const NONE: SideCastling = SideCastling {
        kingside: false,
        queenside: false,
    };

    #[inline]
    pub const fn allows(self, wing: CastleWing) -> bool {
        match wing {
            CastleWing::Kingside => self.kingside,
            CastleWing::Queenside => self.queenside,
        }
    }

    #[inline]
    pub fn revoke(&mut self, wing: CastleWing) {
        match wing {
            CastleWing::Kingside => self.kingside = false,
            CastleWing::Queenside => self.queenside = false,
        }
    }
}

/// Castling permissions of both sides. Flags only ever go from `true` to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub light: SideCastling,
    pub dark: SideCastling,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        light: SideCastling::ALL,
        dark: SideCastling::ALL,
    };
    pub const NONE: CastlingRights = CastlingRights {
        light: SideCastling::NONE,
        dark: SideCastling::NONE,
    };

    #[inline]
    pub const fn side(&self, color: Color) -> SideCastling {
        match color {
            Color::Light => self.light,
            Color::Dark => self.dark,
        }
    }

    #[inline]
    pub fn side_mut(&mut self, color: Color) -> &mut SideCastling {
        match color {
            Color::Light => &mut self.light,
            Color::Dark => &mut self.dark,
        }
    }

    #[inline]
    pub const fn allows(&self, color: Color, wing: CastleWing) -> bool {
        self.side(color).allows(wing)
    }
}

/// A requested move. It carries no guarantee of legality until validated
/// against a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Code of the moving piece as the requester saw it.
    pub piece: PieceCode,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceCode, promotion: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            piece,
            promotion,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            if let Some(letter) = piece_letter(promotion.code(Color::Dark)) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Whether the game goes on, and if not, how it ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// `winner` delivered mate.
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Result from light's point of view: `+1` light won, `-1` dark won,
    /// `0` draw. `None` while the game is in progress.
    #[inline]
    pub const fn score(self) -> Option<i8> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } => Some(winner.sign()),
            GameStatus::Stalemate | GameStatus::FiftyMoveDraw => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_round_trip_through_kind_and_color() {
        for color in [Color::Light, Color::Dark] {
            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ] {
                assert_eq!(decode_piece(kind.code(color)), Some((color, kind)));
            }
        }
        assert_eq!(decode_piece(EMPTY), None);
        assert_eq!(decode_piece(7), None);
    }

    #[test]
    fn lookup_tables_cover_signed_codes() {
        assert_eq!(piece_name(-6), Some("king"));
        assert_eq!(piece_letter(4), Some('R'));
        assert_eq!(piece_letter(-2), Some('n'));
        assert_eq!(piece_symbol(-1), Some('♟'));
        assert_eq!(piece_from_letter('Q'), Some(5));
        assert_eq!(piece_from_letter('x'), None);
    }

    #[test]
    fn off_board_squares_are_representable_and_displayed() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(!Square::new(8, 0).is_on_board());
        assert!(!Square::new(0, -1).is_on_board());
        assert_eq!(Square::new(3, 4).to_string(), "e4");
        assert_eq!(Square::new(-3, 9).to_string(), "(-3, 9)");
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
        assert_eq!(Square::new(i8::MAX, 0).offset(1, 0), None);
    }

    #[test]
    fn checkmate_score_follows_winner() {
        assert_eq!(GameStatus::Checkmate { winner: Color::Light }.score(), Some(1));
        assert_eq!(GameStatus::Checkmate { winner: Color::Dark }.score(), Some(-1));
        assert_eq!(GameStatus::Stalemate.score(), Some(0));
        assert_eq!(GameStatus::InProgress.score(), None);
    }
}
