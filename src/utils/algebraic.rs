//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square index reused by FEN, coordinate-move and notation components.

use crate::board::chess_rules::{FILE_LETTERS, RANK_DIGITS};
use crate::board::chess_types::*;
use crate::chess_errors::ChessErrors;

/// File index for a file letter (`'a'` -> 0).
#[inline]
pub fn file_from_char(c: char) -> Option<u8> {
    FILE_LETTERS.iter().position(|&f| f == c).map(|i| i as u8)
}

/// Grid row for a rank digit (`'8'` -> 0, `'1'` -> 7).
#[inline]
pub fn row_from_char(c: char) -> Option<u8> {
    RANK_DIGITS.iter().position(|&r| r == c).map(|i| i as u8)
}

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidSquare(square.to_owned()));
    };

    match (file_from_char(file), row_from_char(rank)) {
        (Some(file), Some(row)) => Ok(square_at(file, row)),
        _ => Err(ChessErrors::InvalidSquare(square.to_owned())),
    }
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(FILE_LETTERS[file_of(square) as usize]);
    out.push(RANK_DIGITS[row_of(square) as usize]);
    out
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 36);
        assert_eq!(square_to_algebraic(0), "a8");
        assert_eq!(square_to_algebraic(63), "h1");
        assert_eq!(square_to_algebraic(36), "e4");
    }

    #[test]
    fn rejects_out_of_range_names() {
        for bad in ["i1", "a9", "a", "e44", ""] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidSquare(bad.to_owned()))
            );
        }
    }
}
