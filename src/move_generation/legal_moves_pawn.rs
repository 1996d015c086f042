use crate::board::board::Board;
use crate::board::chess_rules::PROMOTION_PIECES;
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;

pub fn generate_pawn_moves(board: &Board, from: Square, out: &mut Vec<CoordinateMove>) {
    let pawn = board.piece_at(from);
    let Some(side) = pawn.color() else {
        return;
    };
    let direction = side.pawn_direction();
    let start_row = match side {
        Color::White => 6,
        Color::Black => 1,
    };

    if let Some(one_step) = offset_square(from, 0, direction) {
        if board.piece_at(one_step).is_empty() {
            push_pawn_move(side, from, one_step, out);

            if row_of(from) == start_row {
                if let Some(two_step) = offset_square(from, 0, 2 * direction) {
                    if board.piece_at(two_step).is_empty() {
                        out.push(CoordinateMove::new(from, two_step));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for file_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, file_delta, direction) else {
            continue;
        };
        let target = board.piece_at(to);
        if pawn.can_capture(target) {
            push_pawn_move(side, from, to, out);
        } else if target.is_empty() && board.en_passant_target == Some(to) {
            out.push(CoordinateMove::new(from, to));
        }
    }
}

/// Push a pawn move, expanding it into one move per promotion piece on the back rank.
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<CoordinateMove>) {
    let back_row = match side {
        Color::White => 0,
        Color::Black => 7,
    };

    if row_of(to) == back_row {
        for kind in PROMOTION_PIECES {
            out.push(CoordinateMove::with_promotion(from, to, Piece::new(side, kind)));
        }
    } else {
        out.push(CoordinateMove::new(from, to));
    }
}
