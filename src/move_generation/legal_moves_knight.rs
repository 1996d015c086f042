use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::move_generation::legal_move_shared::{can_land_on, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut Vec<CoordinateMove>) {
    for &(file_delta, row_delta) in &KNIGHT_OFFSETS {
        let Some(to) = offset_square(from, file_delta, row_delta) else {
            continue;
        };
        if can_land_on(board, from, to) {
            out.push(CoordinateMove::new(from, to));
        }
    }
}
