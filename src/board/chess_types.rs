//! Core value types shared by the board, move generation and notation layers.

use serde::Serialize;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row offset of a pawn advance for this color (rows count down from rank 8).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece kind; color is carried separately by [`Piece`].
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
    /// Lowercase letter used by FEN, coordinate promotion suffixes and SAN.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Content of a single square.
///
/// `Opaque` holds a FEN letter outside the standard piece alphabet. Such a tag
/// has no color: it never moves, cannot be captured and blocks every ray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    Colored(Color, PieceKind),
    Opaque(char),
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece::Colored(color, kind)
    }

    /// Decode a FEN piece letter; uppercase is White.
    pub fn from_fen_char(c: char) -> Self {
        match PieceKind::from_letter(c) {
            Some(kind) if c.is_ascii_uppercase() => Piece::Colored(Color::White, kind),
            Some(kind) => Piece::Colored(Color::Black, kind),
            None => Piece::Opaque(c),
        }
    }

    /// FEN letter for an occupied square, `None` for an empty one.
    pub fn to_fen_char(self) -> Option<char> {
        match self {
            Piece::Empty => None,
            Piece::Colored(Color::White, kind) => Some(kind.letter().to_ascii_uppercase()),
            Piece::Colored(Color::Black, kind) => Some(kind.letter()),
            Piece::Opaque(c) => Some(c),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Colored(color, _) => Some(color),
            _ => None,
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Colored(_, kind) => Some(kind),
            _ => None,
        }
    }

    /// True when `self` may land on a square holding `other`.
    #[inline]
    pub fn can_capture(self, other: Piece) -> bool {
        matches!((self.color(), other.color()), (Some(a), Some(b)) if a != b)
    }
}

/// Square index `0..=63`, row-major from a8: `a8 == 0`, `h8 == 7`, `a1 == 56`, `h1 == 63`.
pub type Square = u8;

#[inline]
pub const fn square_at(file: u8, row: u8) -> Square {
    row * 8 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Grid row of a square (0 = rank 8, 7 = rank 1).
#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

/// Step from `square` by a (file, row) delta, `None` when it leaves the board.
#[inline]
pub fn offset_square(square: Square, file_delta: i8, row_delta: i8) -> Option<Square> {
    let file = file_of(square) as i8 + file_delta;
    let row = row_of(square) as i8 + row_delta;
    if (0..8).contains(&file) && (0..8).contains(&row) {
        Some(square_at(file as u8, row as u8))
    } else {
        None
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Outcome classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters_round_trip_with_case_as_color() {
        let white_knight = Piece::from_fen_char('N');
        assert_eq!(white_knight, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(white_knight.to_fen_char(), Some('N'));

        let black_queen = Piece::from_fen_char('q');
        assert_eq!(black_queen.color(), Some(Color::Black));
        assert_eq!(black_queen.to_fen_char(), Some('q'));
    }

    #[test]
    fn opaque_tags_have_no_color() {
        let tag = Piece::from_fen_char('x');
        assert_eq!(tag, Piece::Opaque('x'));
        assert_eq!(tag.color(), None);
        assert!(!Piece::new(Color::White, PieceKind::Rook).can_capture(tag));
    }

    #[test]
    fn square_helpers_follow_rank_eight_first_layout() {
        assert_eq!(square_at(0, 0), 0);
        assert_eq!(square_at(7, 7), 63);
        assert_eq!(offset_square(square_at(4, 6), 0, -2), Some(square_at(4, 4)));
        assert_eq!(offset_square(square_at(0, 0), -1, 0), None);
        assert_eq!(offset_square(square_at(7, 7), 0, 1), None);
    }
}
