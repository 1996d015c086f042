//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by FEN translation, move
//! token parsing, notation resolution, record parsing and the service
//! collaborators. Parsing and input variants are recoverable and suitable for
//! showing to end users; `IllegalMove` additionally carries the legal move set
//! that was available so callers can offer alternatives.

use thiserror::Error;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A FEN string could not be translated into a position.
    ///
    /// Payload: a short description of the offending field.
    #[error("invalid FEN: {0}")]
    InvalidFormat(String),

    /// A square name outside `a1..=h8`.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A coordinate move token that is not 4 or 5 characters of the form
    /// `<from><to>[promotion]`.
    #[error("invalid coordinate move: {0}")]
    InvalidCoordinateMove(String),

    /// The supplied coordinate move is not in the current legal move set.
    #[error("{mv} is not a legal move")]
    IllegalMove {
        mv: String,
        legal_moves: Vec<String>,
    },

    /// An algebraic notation token matched none of the legal moves.
    #[error("notation `{0}` does not match any legal move")]
    UnresolvedNotation(String),

    /// An algebraic notation token matched more than one legal move.
    #[error("notation `{token}` is ambiguous between {candidates:?}")]
    AmbiguousNotation {
        token: String,
        candidates: Vec<String>,
    },

    /// A record header line or movetext could not be read.
    #[error("invalid game record: {0}")]
    InvalidRecord(String),

    /// The game source collaborator could not provide record text.
    #[error("game source unavailable: {0}")]
    SourceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;

    #[test]
    fn illegal_move_message_names_the_move() {
        let err = ChessErrors::IllegalMove {
            mv: "e2e5".to_owned(),
            legal_moves: vec!["e2e4".to_owned()],
        };
        assert_eq!(err.to_string(), "e2e5 is not a legal move");
    }
}
