//! Board position and its mutation logic.
//!
//! `Board` is the central model of the engine: an 8x8 grid of pieces plus the
//! side to move, castling rights, en-passant target, clocks and the history of
//! applied coordinate moves. Move generation, legality filtering and check
//! detection live under `move_generation` and are exposed here as methods.

use std::fmt;

use crate::board::chess_rules::{castle_for_king_move, rights_touching, STARTING_POSITION_FEN};
use crate::board::chess_types::*;
use crate::board::coordinate_move::CoordinateMove;
use crate::chess_errors::ChessErrors;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_pseudo_legal_moves};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `grid[row][file]`, row 0 is rank 8 and file 0 is the a-file.
    pub grid: [[Piece; 8]; 8],
    pub turn: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the previous ply's double pawn push.
    pub en_passant_target: Option<Square>,
    pub half_move_clock: u32,
    pub full_move_count: u32,
    pub move_history: Vec<CoordinateMove>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// A board with no pieces, White to move and no rights.
    pub fn empty() -> Self {
        Self {
            grid: [[Piece::Empty; 8]; 8],
            turn: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_count: 1,
            move_history: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Replace every field of the board with the position described by `fen`.
    ///
    /// On error the board is left exactly as it was.
    pub fn translate_fen(&mut self, fen: &str) -> Result<(), ChessErrors> {
        *self = parse_fen(fen)?;
        Ok(())
    }

    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.grid[row_of(square) as usize][file_of(square) as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.grid[row_of(square) as usize][file_of(square) as usize] = piece;
    }

    /// All squares holding exactly `piece`, in grid order.
    pub fn where_is(&self, piece: Piece) -> Vec<Square> {
        (0..64u8).filter(|&sq| self.piece_at(sq) == piece).collect()
    }

    /// Copy of the position without the move history, for "what if" probing.
    pub fn scratch_copy(&self) -> Self {
        Self {
            grid: self.grid,
            turn: self.turn,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            half_move_clock: self.half_move_clock,
            full_move_count: self.full_move_count,
            move_history: Vec::new(),
        }
    }

    /// Apply a coordinate move without any legality check.
    pub fn make_move(&mut self, mv: CoordinateMove) {
        self.move_history.push(mv);

        let piece = self.piece_at(mv.from);
        let target = self.piece_at(mv.to);
        let mover = piece.color().unwrap_or(self.turn);

        self.turn = mover.opposite();
        if mover == Color::Black {
            self.full_move_count = self.full_move_count.saturating_add(1);
        }

        let is_pawn = piece.kind() == Some(PieceKind::Pawn);
        let is_en_passant = is_pawn
            && target.is_empty()
            && self.en_passant_target == Some(mv.to)
            && file_of(mv.from) != file_of(mv.to);
        let is_capture = !target.is_empty() || is_en_passant;

        if is_pawn || is_capture {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock = self.half_move_clock.saturating_add(1);
        }

        self.en_passant_target = if is_pawn && row_of(mv.from).abs_diff(row_of(mv.to)) == 2 {
            Some(square_at(
                file_of(mv.from),
                (row_of(mv.from) + row_of(mv.to)) / 2,
            ))
        } else {
            None
        };

        self.castling_rights &= !(rights_touching(mv.from) | rights_touching(mv.to));

        let placed = match mv.promotion_kind() {
            Some(kind) => Piece::new(mover, kind),
            None => piece,
        };

        if is_en_passant {
            self.set_piece(square_at(file_of(mv.to), row_of(mv.from)), Piece::Empty);
        }

        self.set_piece(mv.from, Piece::Empty);
        self.set_piece(mv.to, placed);

        if piece.kind() == Some(PieceKind::King) {
            if let Some(castle) = castle_for_king_move(mv.from, mv.to) {
                let rook = self.piece_at(castle.rook_from);
                self.set_piece(castle.rook_from, Piece::Empty);
                self.set_piece(castle.rook_to, rook);
            }
        }
    }

    /// Parse a wire token and apply it.
    pub fn make_move_str(&mut self, token: &str) -> Result<(), ChessErrors> {
        let mv = token.parse::<CoordinateMove>()?;
        self.make_move(mv);
        Ok(())
    }

    /// Pseudo-legal moves for the side to move; self-check is not considered.
    pub fn available_moves(&self) -> Vec<CoordinateMove> {
        generate_pseudo_legal_moves(self)
    }

    /// Legal moves for the side to move.
    ///
    /// `Some` with moves is a normal position, `Some` of an empty list is
    /// stalemate, and `None` is checkmate.
    pub fn available_legal_moves(&self) -> Option<Vec<CoordinateMove>> {
        let legal = generate_legal_moves(self);
        if legal.is_empty() && self.is_check() {
            None
        } else {
            Some(legal)
        }
    }

    /// True if the side to move has its king attacked.
    pub fn is_check(&self) -> bool {
        is_king_in_check(self, self.turn)
    }

    pub fn status(&self) -> GameStatus {
        match self.available_legal_moves() {
            None => GameStatus::Checkmate,
            Some(moves) if moves.is_empty() => GameStatus::Stalemate,
            Some(_) if self.is_check() => GameStatus::Check,
            Some(_) => GameStatus::Ongoing,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_rules::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn moves_as_strings(moves: &[CoordinateMove]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(ToString::to_string).collect();
        out.sort();
        out
    }

    fn sorted(list: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn make_move_updates_every_field() {
        let mut board = Board::new_game();
        board.make_move_str("e2e4").expect("e2e4 should parse");

        assert_eq!(board.piece_at(sq("e2")), Piece::Empty);
        assert_eq!(board.piece_at(sq("e4")), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(board.full_move_count, 1);
        assert_eq!(board.en_passant_target, Some(sq("e3")));
        assert_eq!(board.turn, Color::Black);
        assert_eq!(moves_as_strings(&board.move_history), vec!["e2e4"]);
        assert_eq!(
            board.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        board.make_move_str("g8f6").expect("g8f6 should parse");
        assert_eq!(board.en_passant_target, None);
        assert_eq!(board.full_move_count, 2);
        assert_eq!(board.half_move_clock, 1);
    }

    #[test]
    fn castling_relocates_the_rook() {
        let mut board = Board::from_fen("4r3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        board.make_move_str("e1g1").expect("e1g1 should parse");

        assert_eq!(
            board.grid[7],
            [
                Piece::Empty,
                Piece::Empty,
                Piece::Empty,
                Piece::Empty,
                Piece::Empty,
                Piece::new(Color::White, PieceKind::Rook),
                Piece::new(Color::White, PieceKind::King),
                Piece::Empty,
            ]
        );
        assert_eq!(board.castling_rights, 0);
    }

    #[test]
    fn queenside_castle_for_black() {
        let mut board =
            Board::from_fen("r3k3/8/8/8/8/8/8/4K3 b q - 3 20").expect("FEN should parse");
        board.make_move_str("e8c8").expect("e8c8 should parse");
        assert_eq!(board.fen(), "2kr4/8/8/8/8/8/8/4K3 w - - 4 21");
    }

    #[test]
    fn en_passant_capture_removes_the_pawn() {
        let mut board =
            Board::from_fen("8/8/8/4pP2/8/8/P7/8 w - e6 0 1").expect("FEN should parse");
        board.make_move_str("f5e6").expect("f5e6 should parse");
        assert_eq!(board.piece_at(sq("e5")), Piece::Empty);
        assert_eq!(board.piece_at(sq("e6")), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(board.half_move_clock, 0);
    }

    #[test]
    fn promotion_places_the_chosen_piece() {
        let mut board = Board::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        board.make_move_str("e7e8N").expect("e7e8N should parse");
        assert_eq!(board.piece_at(sq("e8")), Piece::new(Color::White, PieceKind::Knight));
    }

    #[test]
    fn legal_moves_after_e2e4_are_the_twenty_reference_moves() {
        let mut board = Board::new_game();
        board.make_move_str("e2e4").expect("e2e4 should parse");

        let legal = board.available_legal_moves().expect("black is not mated");
        assert_eq!(
            moves_as_strings(&legal),
            sorted(&[
                "a7a6", "a7a5", "b7b6", "b7b5", "c7c6", "c7c5", "d7d6", "d7d5", "e7e6", "e7e5",
                "f7f6", "f7f5", "g7g6", "g7g5", "h7h6", "h7h5", "b8a6", "b8c6", "g8h6", "g8f6",
            ])
        );
        assert_eq!(board.turn, Color::Black);
    }

    #[test]
    fn checked_king_has_only_escape() {
        let board = Board::from_fen("4k3/4Q3/8/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let legal = board.available_legal_moves().expect("not mate");
        assert_eq!(moves_as_strings(&legal), vec!["e8e7"]);
    }

    #[test]
    fn checked_king_may_capture_or_be_rescued() {
        let board = Board::from_fen("8/1b6/K7/8/1R6/8/8/8 w - - 0 1").expect("FEN should parse");
        let legal = board.available_legal_moves().expect("not mate");
        assert_eq!(
            moves_as_strings(&legal),
            sorted(&["a6b7", "a6a7", "a6b6", "a6b5", "a6a5", "b4b7"])
        );
    }

    #[test]
    fn no_castling_out_of_check() {
        let board =
            Board::from_fen("1k6/8/8/8/8/6b1/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let legal = board.available_legal_moves().expect("not mate");
        assert_eq!(
            moves_as_strings(&legal),
            sorted(&["e1d1", "e1d2", "e1e2", "e1f1"])
        );
    }

    #[test]
    fn no_castling_through_an_attacked_square() {
        let board =
            Board::from_fen("1r6/8/8/8/8/7b/n7/R3K2R w KQ - 0 1").expect("FEN should parse");
        let legal = moves_as_strings(&board.available_legal_moves().expect("not mate"));
        assert!(!legal.contains(&"e1g1".to_owned()), "f1 is covered by the bishop");
        assert!(!legal.contains(&"e1c1".to_owned()), "c1 is covered by the knight");
        assert!(!legal.contains(&"e1f1".to_owned()));
        for expected in ["e1d1", "e1d2", "e1e2", "e1f2", "h1f1", "a1b1"] {
            assert!(legal.contains(&expected.to_owned()), "{expected} should be legal");
        }
    }

    #[test]
    fn queenside_castle_requires_empty_b_file_square() {
        let board =
            Board::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").expect("FEN should parse");
        let pseudo = moves_as_strings(&board.available_moves());
        assert!(!pseudo.contains(&"e1c1".to_owned()));

        let open = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        let legal = moves_as_strings(&open.available_legal_moves().expect("not mate"));
        assert!(legal.contains(&"e1c1".to_owned()));
    }

    #[test]
    fn checkmate_yields_no_move_list() {
        let board = Board::from_fen("k7/1Q6/2K5/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(board.is_check());
        assert_eq!(board.available_legal_moves(), None);
        assert_eq!(board.status(), GameStatus::Checkmate);
    }

    #[test]
    fn stalemate_yields_empty_move_list() {
        let board = Board::from_fen("k7/1R6/2K5/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!board.is_check());
        assert_eq!(board.available_legal_moves(), Some(Vec::new()));
        assert_eq!(board.status(), GameStatus::Stalemate);
    }

    #[test]
    fn en_passant_is_offered_for_one_ply_only() {
        let mut board =
            Board::from_fen("8/8/8/4pP2/8/8/P7/8 w - e6 0 1").expect("FEN should parse");
        let legal = moves_as_strings(&board.available_legal_moves().expect("not mate"));
        assert!(legal.contains(&"f5e6".to_owned()));

        board.make_move_str("a2a3").expect("a2a3 should parse");
        assert_eq!(board.en_passant_target, None);
        board.turn = Color::White;
        let legal = moves_as_strings(&board.available_moves());
        assert!(!legal.contains(&"f5e6".to_owned()));
    }

    #[test]
    fn rook_capture_on_home_square_revokes_the_right() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").expect("FEN should parse");
        board.make_move_str("g2h1").expect("g2h1 should parse");
        assert_eq!(
            board.castling_rights,
            CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        board.make_move_str("a1a2").expect("a1a2 should parse");
        board.make_move_str("h1g2").expect("h1g2 should parse");
        board.make_move_str("a2a1").expect("a2a1 should parse");
        assert_eq!(board.castling_rights & (CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE), 0);
        assert!(board.fen().contains(" kq "));
    }

    #[test]
    fn king_move_revokes_both_rights() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        board.make_move_str("e1e2").expect("e1e2 should parse");
        assert_eq!(board.castling_rights, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    }

    #[test]
    fn where_is_finds_every_copy() {
        let board = Board::new_game();
        assert_eq!(board.where_is(Piece::new(Color::Black, PieceKind::King)), vec![E8]);
        assert_eq!(board.where_is(Piece::new(Color::White, PieceKind::Rook)), vec![A1, H1]);
        assert_eq!(board.where_is(Piece::new(Color::White, PieceKind::Pawn)).len(), 8);
    }

    #[test]
    fn failed_translation_leaves_board_untouched() {
        let mut board = Board::new_game();
        board.make_move_str("d2d4").expect("d2d4 should parse");
        let before = board.clone();

        let err = board.translate_fen("8/8/8 w - - 0 1");
        assert!(matches!(err, Err(ChessErrors::InvalidFormat(_))));
        assert_eq!(board, before);
    }
}
