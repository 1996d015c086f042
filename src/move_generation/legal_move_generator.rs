//! Full legal move generation pipeline.
//!
//! Dispatches per-piece pseudo-legal generation for the side to move, applies
//! each candidate to a scratch copy of the board, and drops candidates that
//! leave the mover's king attacked. Castles are additionally dropped when the
//! king starts in check or crosses an attacked square.

use crate::board::board::Board;
use crate::board::chess_rules::castle_for_king_move;
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::generator_for;

pub fn generate_pseudo_legal_moves(board: &Board) -> Vec<CoordinateMove> {
    let mut pseudo = Vec::<CoordinateMove>::with_capacity(64);

    for square in 0..64u8 {
        let piece = board.piece_at(square);
        let Piece::Colored(color, kind) = piece else {
            continue;
        };
        if color != board.turn {
            continue;
        }
        generator_for(kind)(board, square, &mut pseudo);
    }

    pseudo
}

pub fn generate_legal_moves(board: &Board) -> Vec<CoordinateMove> {
    let mover = board.turn;
    let opponent = mover.opposite();
    let in_check = is_king_in_check(board, mover);

    generate_pseudo_legal_moves(board)
        .into_iter()
        .filter(|mv| {
            let mut next = board.scratch_copy();
            next.make_move(*mv);

            // Illegal if own king is in check after move.
            if is_king_in_check(&next, mover) {
                return false;
            }

            let is_king = board.piece_at(mv.from).kind() == Some(PieceKind::King);
            match castle_for_king_move(mv.from, mv.to) {
                Some(castle) if is_king => {
                    !in_check && !is_square_attacked(&next, castle.king_transit, opponent)
                }
                _ => true,
            }
        })
        .collect()
}
