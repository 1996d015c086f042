//! Canonical chess-rule constants.
//!
//! Fixed, read-only tables: the standard starting position, file/rank
//! letters, promotion pieces and the castling geometry.

use crate::board::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// File letters indexed by file (0 = a).
pub const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank digits indexed by grid row (0 = rank 8).
pub const RANK_DIGITS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// Pieces a pawn may promote to, in generation order.
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
];

pub const A8: Square = 0;
pub const E8: Square = 4;
pub const H8: Square = 7;
pub const A1: Square = 56;
pub const E1: Square = 60;
pub const H1: Square = 63;

/// One castling option: the right that enables it and the squares it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub right: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    /// Square the king crosses; must not be attacked.
    pub king_transit: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastleGeometry {
    /// Squares strictly between king and rook; all must be empty.
    pub fn between(&self) -> impl Iterator<Item = Square> {
        let (low, high) = if self.king_from < self.rook_from {
            (self.king_from, self.rook_from)
        } else {
            (self.rook_from, self.king_from)
        };
        (low + 1)..high
    }
}

pub const CASTLES: [CastleGeometry; 4] = [
    CastleGeometry {
        right: CASTLE_WHITE_KINGSIDE,
        color: Color::White,
        king_from: E1,
        king_to: 62,
        king_transit: 61,
        rook_from: H1,
        rook_to: 61,
    },
    CastleGeometry {
        right: CASTLE_WHITE_QUEENSIDE,
        color: Color::White,
        king_from: E1,
        king_to: 58,
        king_transit: 59,
        rook_from: A1,
        rook_to: 59,
    },
    CastleGeometry {
        right: CASTLE_BLACK_KINGSIDE,
        color: Color::Black,
        king_from: E8,
        king_to: 6,
        king_transit: 5,
        rook_from: H8,
        rook_to: 5,
    },
    CastleGeometry {
        right: CASTLE_BLACK_QUEENSIDE,
        color: Color::Black,
        king_from: E8,
        king_to: 2,
        king_transit: 3,
        rook_from: A8,
        rook_to: 3,
    },
];

/// The castle a king move from `from` to `to` performs, if any.
pub fn castle_for_king_move(from: Square, to: Square) -> Option<&'static CastleGeometry> {
    CASTLES
        .iter()
        .find(|castle| castle.king_from == from && castle.king_to == to)
}

/// Rights lost when a piece leaves or lands on `square`.
pub const fn rights_touching(square: Square) -> CastlingRights {
    match square {
        A1 => CASTLE_WHITE_QUEENSIDE,
        H1 => CASTLE_WHITE_KINGSIDE,
        E1 => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        A8 => CASTLE_BLACK_QUEENSIDE,
        H8 => CASTLE_BLACK_KINGSIDE,
        E8 => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::square_to_algebraic;

    #[test]
    fn castle_squares_match_their_names() {
        let names: Vec<_> = CASTLES
            .iter()
            .map(|c| {
                (
                    square_to_algebraic(c.king_to),
                    square_to_algebraic(c.king_transit),
                )
            })
            .collect();
        assert_eq!(
            names,
            vec![
                ("g1".to_owned(), "f1".to_owned()),
                ("c1".to_owned(), "d1".to_owned()),
                ("g8".to_owned(), "f8".to_owned()),
                ("c8".to_owned(), "d8".to_owned()),
            ]
        );
    }

    #[test]
    fn queenside_castle_requires_three_empty_squares() {
        assert_eq!(CASTLES[1].between().count(), 3);
        assert_eq!(CASTLES[0].between().count(), 2);
    }
}
