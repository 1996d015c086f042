//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the `show`
//! command.

use crate::board::board::Board;
use crate::board::chess_rules::RANK_DIGITS;
use crate::board::chess_types::*;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, rank) in board.grid.iter().enumerate() {
        out.push(RANK_DIGITS[row]);
        out.push(' ');

        for (file, piece) in rank.iter().enumerate() {
            out.push(piece_to_unicode(*piece));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(RANK_DIGITS[row]);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::Empty => '·',
        Piece::Opaque(c) => c,
        Piece::Colored(Color::White, PieceKind::Pawn) => '♙',
        Piece::Colored(Color::White, PieceKind::Knight) => '♘',
        Piece::Colored(Color::White, PieceKind::Bishop) => '♗',
        Piece::Colored(Color::White, PieceKind::Rook) => '♖',
        Piece::Colored(Color::White, PieceKind::Queen) => '♕',
        Piece::Colored(Color::White, PieceKind::King) => '♔',
        Piece::Colored(Color::Black, PieceKind::Pawn) => '♟',
        Piece::Colored(Color::Black, PieceKind::Knight) => '♞',
        Piece::Colored(Color::Black, PieceKind::Bishop) => '♝',
        Piece::Colored(Color::Black, PieceKind::Rook) => '♜',
        Piece::Colored(Color::Black, PieceKind::Queen) => '♛',
        Piece::Colored(Color::Black, PieceKind::King) => '♚',
    }
}
