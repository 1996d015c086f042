use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::move_generation::legal_move_shared::{
    Direction, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS, ROYAL_DIRECTIONS,
};

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<CoordinateMove>) {
    generate_sliding_moves(board, from, &DIAGONAL_DIRECTIONS, 7, out);
}

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut Vec<CoordinateMove>) {
    generate_sliding_moves(board, from, &ORTHOGONAL_DIRECTIONS, 7, out);
}

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<CoordinateMove>) {
    generate_sliding_moves(board, from, &ROYAL_DIRECTIONS, 7, out);
}

/// Walk each direction until the edge, a blocker, or `max_steps`.
///
/// Own pieces and opaque tags stop the walk exclusively; an enemy piece stops
/// it inclusively as a capture.
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    directions: &[Direction],
    max_steps: u8,
    out: &mut Vec<CoordinateMove>,
) {
    let mover = board.piece_at(from);

    for &(file_step, row_step) in directions {
        let mut current = from;
        for _ in 0..max_steps {
            let Some(to) = offset_square(current, file_step, row_step) else {
                break;
            };
            let target = board.piece_at(to);

            if target.is_empty() {
                out.push(CoordinateMove::new(from, to));
                current = to;
                continue;
            }

            if mover.can_capture(target) {
                out.push(CoordinateMove::new(from, to));
            }
            break;
        }
    }
}
