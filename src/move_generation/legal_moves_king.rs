use crate::board::board::Board;
use crate::board::chess_rules::CASTLES;
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::move_generation::legal_move_shared::ROYAL_DIRECTIONS;
use crate::move_generation::legal_moves_sliding::generate_sliding_moves;

pub fn generate_king_moves(board: &Board, from: Square, out: &mut Vec<CoordinateMove>) {
    generate_castling_moves(board, from, out);
    generate_sliding_moves(board, from, &ROYAL_DIRECTIONS, 1, out);
}

/// Castles offered by rights and empty squares alone.
///
/// Whether the king is in check or crosses an attacked square is decided by
/// the legality filter.
fn generate_castling_moves(board: &Board, king_from: Square, out: &mut Vec<CoordinateMove>) {
    let king = board.piece_at(king_from);
    let Some(side) = king.color() else {
        return;
    };
    let rook = Piece::new(side, PieceKind::Rook);

    for castle in CASTLES.iter().filter(|c| c.color == side) {
        if board.castling_rights & castle.right == 0
            || castle.king_from != king_from
            || board.piece_at(castle.rook_from) != rook
        {
            continue;
        }
        if castle.between().all(|sq| board.piece_at(sq).is_empty()) {
            out.push(CoordinateMove::new(castle.king_from, castle.king_to));
        }
    }
}
