//! Coordinate ("square-to-square") move tokens such as `e2e4` or `e7e8Q`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::board::chess_types::*;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Origin square, target square and optional promotion piece.
///
/// The promotion piece keeps its color so the wire token uses the
/// side-appropriate case (uppercase for White, lowercase for Black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl CoordinateMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        self.promotion.and_then(Piece::kind)
    }

    /// Same squares and same promotion kind, ignoring the promotion letter's case.
    pub fn same_move(&self, other: &CoordinateMove) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion_kind() == other.promotion_kind()
    }
}

impl FromStr for CoordinateMove {
    type Err = ChessErrors;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessErrors::InvalidCoordinateMove(token.to_owned());
        if !token.is_ascii() || !(4..=5).contains(&token.len()) {
            return Err(invalid());
        }

        let from = algebraic_to_square(&token[0..2]).map_err(|_| invalid())?;
        let to = algebraic_to_square(&token[2..4]).map_err(|_| invalid())?;

        let promotion = match token[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_fen_char(c) {
                piece @ Piece::Colored(_, kind) if kind != PieceKind::Pawn && kind != PieceKind::King => {
                    Some(piece)
                }
                _ => return Err(invalid()),
            },
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )?;
        if let Some(c) = self.promotion.and_then(Piece::to_fen_char) {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Serialize for CoordinateMove {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
