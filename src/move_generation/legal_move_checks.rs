//! Attack and check detection.
//!
//! A square is attacked when some opponent pseudo-legal reply could land on
//! it. Rather than generating every reply, the scan walks outward from the
//! square and looks for the piece that would have to stand at the other end.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::move_generation::legal_move_shared::{
    Direction, DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS, ROYAL_DIRECTIONS,
};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .where_is(Piece::new(color, PieceKind::King))
        .first()
        .copied()
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Option<Square>, kind: PieceKind| {
        sq.is_some_and(|sq| board.piece_at(sq) == Piece::new(attacker_color, kind))
    };

    // A pawn attacks one row ahead in its own direction.
    let behind = -attacker_color.pawn_direction();
    if holds(offset_square(square, -1, behind), PieceKind::Pawn)
        || holds(offset_square(square, 1, behind), PieceKind::Pawn)
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(offset_square(square, df, dr), PieceKind::Knight))
    {
        return true;
    }

    if ROYAL_DIRECTIONS
        .iter()
        .any(|&(df, dr)| holds(offset_square(square, df, dr), PieceKind::King))
    {
        return true;
    }

    let diagonal = first_piece_on_rays(board, square, &DIAGONAL_DIRECTIONS);
    let orthogonal = first_piece_on_rays(board, square, &ORTHOGONAL_DIRECTIONS);

    diagonal.iter().any(|&piece| {
        piece == Piece::new(attacker_color, PieceKind::Bishop)
            || piece == Piece::new(attacker_color, PieceKind::Queen)
    }) || orthogonal.iter().any(|&piece| {
        piece == Piece::new(attacker_color, PieceKind::Rook)
            || piece == Piece::new(attacker_color, PieceKind::Queen)
    })
}

/// First occupied square's piece along each ray, skipping rays that reach the edge.
fn first_piece_on_rays(board: &Board, square: Square, directions: &[Direction]) -> Vec<Piece> {
    let mut found = Vec::with_capacity(directions.len());
    for &(file_step, row_step) in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, file_step, row_step) {
            let piece = board.piece_at(next);
            if !piece.is_empty() {
                found.push(piece);
                break;
            }
            current = next;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::board::board::Board;
    use crate::board::chess_types::Color;
    use crate::utils::algebraic::algebraic_to_square;

    fn attacked(fen: &str, square: &str, by: Color) -> bool {
        let board = Board::from_fen(fen).expect("FEN should parse");
        let sq = algebraic_to_square(square).expect("square should parse");
        is_square_attacked(&board, sq, by)
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        let fen = "8/8/8/8/4P3/8/8/8 w - - 0 1";
        assert!(attacked(fen, "d5", Color::White));
        assert!(attacked(fen, "f5", Color::White));
        assert!(!attacked(fen, "e5", Color::White));
        assert!(!attacked(fen, "d3", Color::White));

        let fen = "8/8/8/4p3/8/8/8/8 b - - 0 1";
        assert!(attacked(fen, "d4", Color::Black));
        assert!(!attacked(fen, "d6", Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let fen = "8/8/8/8/R2n3k/8/8/8 w - - 0 1";
        assert!(attacked(fen, "d4", Color::White));
        assert!(!attacked(fen, "e4", Color::White));
        assert!(!attacked(fen, "h4", Color::White));
        assert!(attacked(fen, "a8", Color::White));
    }

    #[test]
    fn knight_and_king_contact_attacks() {
        let fen = "8/8/8/8/3N4/8/8/6k1 w - - 0 1";
        assert!(attacked(fen, "e6", Color::White));
        assert!(!attacked(fen, "e5", Color::White));
        assert!(attacked(fen, "h2", Color::Black));
        assert!(!attacked(fen, "h3", Color::Black));
    }

    #[test]
    fn check_is_relative_to_the_king_color() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&board, Color::Black));
        assert!(!is_king_in_check(&board, Color::White));
        assert!(board.is_check());
    }
}
