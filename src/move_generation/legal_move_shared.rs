//! Direction tables and the piece-kind dispatch shared by the generators.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// (file, row) steps.
pub type Direction = (i8, i8);

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

pub const ROYAL_DIRECTIONS: [Direction; 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// Appends the pseudo-legal moves of the piece standing on a square.
pub type PieceMoveGenerator = fn(&Board, Square, &mut Vec<CoordinateMove>);

/// Generator for each piece kind.
pub const fn generator_for(kind: PieceKind) -> PieceMoveGenerator {
    match kind {
        PieceKind::Pawn => generate_pawn_moves,
        PieceKind::Knight => generate_knight_moves,
        PieceKind::Bishop => generate_bishop_moves,
        PieceKind::Rook => generate_rook_moves,
        PieceKind::Queen => generate_queen_moves,
        PieceKind::King => generate_king_moves,
    }
}

/// True when the piece on `from` may land on `to` (empty or enemy-held).
#[inline]
pub fn can_land_on(board: &Board, from: Square, to: Square) -> bool {
    let target = board.piece_at(to);
    target.is_empty() || board.piece_at(from).can_capture(target)
}
