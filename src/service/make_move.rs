//! Move-validation service.
//!
//! Stateless request/response wrapper around `Board`: load a position from
//! FEN, check the requested coordinate move against the legal set, apply it
//! and report the resulting position.

use serde::Serialize;
use tracing::debug;

use crate::board::board::Board;
use crate::board::coordinate_move::CoordinateMove;
use crate::chess_errors::ChessErrors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakeMoveResponse {
    /// Always `true` on a successful response.
    pub move_done: bool,
    /// The legal move that was applied, with the promotion letter normalized.
    pub move_applied: CoordinateMove,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    /// Legal replies for the side now to move; empty on mate or stalemate.
    pub available_moves: Vec<CoordinateMove>,
    pub fen: String,
}

pub fn make_move(mv: &str, fen: &str) -> Result<MakeMoveResponse, ChessErrors> {
    let mut board = Board::from_fen(fen)?;
    let requested = mv.parse::<CoordinateMove>()?;

    let legal = board.available_legal_moves().unwrap_or_default();
    let Some(chosen) = legal.iter().copied().find(|m| m.same_move(&requested)) else {
        debug!(mv, fen, "rejecting illegal move");
        return Err(ChessErrors::IllegalMove {
            mv: mv.to_owned(),
            legal_moves: legal.iter().map(ToString::to_string).collect(),
        });
    };

    board.make_move(chosen);

    let replies = board.available_legal_moves();
    Ok(MakeMoveResponse {
        move_done: true,
        move_applied: chosen,
        is_checkmate: replies.is_none(),
        is_stalemate: replies.as_ref().is_some_and(Vec::is_empty),
        available_moves: replies.unwrap_or_default(),
        fen: board.fen(),
    })
}
