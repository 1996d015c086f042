//! Algebraic notation resolution.
//!
//! Maps one algebraic token (`e4`, `Nf3`, `exd5`, `Rhd8`, `e8=Q`, `O-O`) onto
//! the single coordinate move it denotes, searching only the legal moves the
//! caller supplies. The board is read to identify piece kinds on origin
//! squares and is never mutated.

use tracing::trace;

use crate::board::board::Board;
use crate::board::chess_rules::{CASTLES, PROMOTION_PIECES};
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, file_from_char, row_from_char};

/// What a non-castling token says about the move it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MovePattern {
    kind: PieceKind,
    target: Square,
    from_file: Option<u8>,
    from_row: Option<u8>,
    promotion: Option<PieceKind>,
}

/// Strip check, mate and annotation marks from the end of a token.
pub fn strip_annotations(token: &str) -> &str {
    token.trim_end_matches(['+', '#', '!', '?'])
}

pub fn resolve_notation(
    token: &str,
    legal_moves: &[CoordinateMove],
    board: &Board,
) -> Result<CoordinateMove, ChessErrors> {
    let cleaned = strip_annotations(token.trim());

    if let Some(castle) = castle_for_token(cleaned, board.turn) {
        trace!(token, resolved = %castle, "resolved castle");
        return Ok(castle);
    }

    let unresolved = || ChessErrors::UnresolvedNotation(token.to_owned());
    let pattern = parse_pattern(cleaned).ok_or_else(unresolved)?;

    let candidates: Vec<CoordinateMove> = legal_moves
        .iter()
        .copied()
        .filter(|mv| pattern_matches(&pattern, mv, board))
        .collect();

    match candidates.as_slice() {
        [] => Err(unresolved()),
        [only] => {
            trace!(token, resolved = %only, "resolved notation");
            Ok(*only)
        }
        _ => Err(ChessErrors::AmbiguousNotation {
            token: token.to_owned(),
            candidates: candidates.iter().map(ToString::to_string).collect(),
        }),
    }
}

/// Castling tokens map straight onto the king's coordinate move for `side`.
fn castle_for_token(token: &str, side: Color) -> Option<CoordinateMove> {
    let kingside = match token {
        "O-O" | "0-0" => true,
        "O-O-O" | "0-0-0" => false,
        _ => return None,
    };
    let right = match (side, kingside) {
        (Color::White, true) => CASTLE_WHITE_KINGSIDE,
        (Color::White, false) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, true) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, false) => CASTLE_BLACK_QUEENSIDE,
    };
    CASTLES
        .iter()
        .find(|castle| castle.right == right)
        .map(|castle| CoordinateMove::new(castle.king_from, castle.king_to))
}

fn parse_pattern(token: &str) -> Option<MovePattern> {
    if !token.is_ascii() {
        return None;
    }
    let (body, promotion) = split_promotion(token)?;

    if let Some((descriptor, target)) = body.split_once('x') {
        let target = algebraic_to_square(target).ok()?;
        return parse_descriptor(descriptor, target, promotion);
    }

    if body.len() == 2 {
        let target = algebraic_to_square(body).ok()?;
        return Some(MovePattern {
            kind: PieceKind::Pawn,
            target,
            from_file: Some(file_of(target)),
            from_row: None,
            promotion,
        });
    }

    if body.len() < 3 {
        return None;
    }
    let (descriptor, target) = body.split_at(body.len() - 2);
    let target = algebraic_to_square(target).ok()?;
    if !descriptor.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    parse_descriptor(descriptor, target, promotion)
}

/// Split `e8=Q` / `e8Q` into the move body and the promotion kind.
fn split_promotion(token: &str) -> Option<(&str, Option<PieceKind>)> {
    if let Some((body, piece)) = token.split_once('=') {
        let mut chars = piece.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => promotion_kind(c)?,
            _ => return None,
        };
        return Some((body, Some(kind)));
    }

    let bytes = token.as_bytes();
    let is_bare_pawn_promotion = bytes.len() >= 3
        && bytes[0].is_ascii_lowercase()
        && matches!(bytes[bytes.len() - 2], b'1' | b'8')
        && bytes[bytes.len() - 1].is_ascii_uppercase();
    if is_bare_pawn_promotion {
        let kind = promotion_kind(char::from(bytes[bytes.len() - 1]))?;
        return Some((&token[..token.len() - 1], Some(kind)));
    }

    Some((token, None))
}

fn promotion_kind(c: char) -> Option<PieceKind> {
    PieceKind::from_letter(c).filter(|kind| PROMOTION_PIECES.contains(kind))
}

/// Interpret the part before the target square: a piece letter with an
/// optional file, rank or square disambiguator, or a lone pawn file.
fn parse_descriptor(
    descriptor: &str,
    target: Square,
    promotion: Option<PieceKind>,
) -> Option<MovePattern> {
    let mut chars = descriptor.chars();
    let first = chars.next()?;
    let rest: Vec<char> = chars.collect();

    let mut pattern = MovePattern {
        kind: PieceKind::Pawn,
        target,
        from_file: None,
        from_row: None,
        promotion,
    };

    if first.is_ascii_lowercase() {
        if !rest.is_empty() {
            return None;
        }
        pattern.from_file = Some(file_from_char(first)?);
        return Some(pattern);
    }

    pattern.kind = PieceKind::from_letter(first).filter(|_| first.is_ascii_uppercase())?;
    match rest.as_slice() {
        [] => {}
        [c] => {
            if let Some(file) = file_from_char(*c) {
                pattern.from_file = Some(file);
            } else {
                pattern.from_row = Some(row_from_char(*c)?);
            }
        }
        [f, r] => {
            pattern.from_file = Some(file_from_char(*f)?);
            pattern.from_row = Some(row_from_char(*r)?);
        }
        _ => return None,
    }
    Some(pattern)
}

fn pattern_matches(pattern: &MovePattern, mv: &CoordinateMove, board: &Board) -> bool {
    mv.to == pattern.target
        && board.piece_at(mv.from) == Piece::new(board.turn, pattern.kind)
        && pattern.from_file.is_none_or(|file| file_of(mv.from) == file)
        && pattern.from_row.is_none_or(|row| row_of(mv.from) == row)
        && mv.promotion_kind() == pattern.promotion
}
