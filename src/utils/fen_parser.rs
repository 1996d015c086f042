//! FEN-to-Board parser.
//!
//! Builds a complete position from a Forsyth-Edwards Notation string. The
//! result is a fresh `Board`, so a failed parse never leaves a caller's board
//! half-written.

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::algebraic_to_square;

fn invalid(reason: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFormat(reason.into())
}

pub fn parse_fen(fen: &str) -> Result<Board, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing half-move clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing full-move count"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = Board::empty();

    parse_board(board_part, &mut board)?;
    board.turn = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant_target = parse_en_passant_square(en_passant_part)?;
    board.half_move_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("half-move clock `{halfmove_part}`")))?;
    board.full_move_count = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("full-move count `{fullmove_part}`")))?;

    Ok(board)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!("expected 8 ranks, found {}", ranks.len())));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count `{ch}`")));
                }
                file += empty_count as usize;
            } else if ch.is_ascii_alphabetic() {
                if file < 8 {
                    board.grid[row][file] = Piece::from_fen_char(ch);
                }
                file += 1;
            } else {
                return Err(invalid(format!("unexpected character `{ch}` in board layout")));
            }
        }

        if file != 8 {
            return Err(invalid(format!(
                "rank `{rank_str}` describes {file} squares instead of 8"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side to move `{side_part}`"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(format!("castling rights `{castling_part}`"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("en-passant square `{en_passant_part}`")))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::board::chess_types::*;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn parse_starting_fen() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(board.turn, Color::White);
        assert_eq!(board.castling_rights, CASTLE_ALL);
        assert_eq!(board.en_passant_target, None);
        assert_eq!(board.full_move_count, 1);
        assert_eq!(board.half_move_clock, 0);
        assert_eq!(board.grid[0][4], Piece::new(Color::Black, PieceKind::King));
        assert_eq!(board.grid[7][3], Piece::new(Color::White, PieceKind::Queen));
        assert!(board.move_history.is_empty());
    }

    #[test]
    fn rejects_structural_errors() {
        let bad = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8 w KQkq - 0 1",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkz - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFormat(_))),
                "`{fen}` should be rejected"
            );
        }
    }

    #[test]
    fn unknown_letters_become_opaque_tags() {
        let board = parse_fen("8/8/8/3x4/8/8/8/8 w - - 0 1").expect("opaque tags are accepted");
        assert_eq!(board.grid[3][3], Piece::Opaque('x'));
    }
}
