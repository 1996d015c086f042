//! Leaf-node counting over the legal move tree.
//!
//! Used to validate the generator against published node counts and as a
//! benchmark workload.

use crate::board::board::Board;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = board.scratch_copy();
            next.make_move(mv);
            perft(&next, depth - 1)
        })
        .sum()
}

/// Node count below each root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves(board)
        .into_iter()
        .map(|mv| {
            let mut next = board.scratch_copy();
            next.make_move(mv);
            (mv.to_string(), perft(&next, depth - 1))
        })
        .collect()
}
