//! Plain-text game record reading.
//!
//! Splits a multi-game record into `GameRecord`s, keeps the recognized header
//! fields and the raw movetext, and replays the movetext through the notation
//! resolver to recover each game's coordinate-move sequence.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::board::board::Board;
use crate::board::coordinate_move::CoordinateMove;
use crate::chess_errors::ChessErrors;
use crate::notation::san_resolver::{resolve_notation, strip_annotations};

const GAME_START_HEADER: &str = "Event";
const DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub event: String,
    pub site: String,
    pub date: String,
    pub white: String,
    pub black: String,
    pub result: String,
    pub variant: String,
    pub time_control: String,
    pub eco: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    pub movetext: String,
    pub moves: Vec<CoordinateMove>,
}

impl GameRecord {
    /// Store a header value if the key is one the record keeps.
    pub fn insert_header(&mut self, key: &str, value: String) {
        let slot = match key {
            "Event" => &mut self.event,
            "Site" => &mut self.site,
            "Date" => &mut self.date,
            "White" => &mut self.white,
            "Black" => &mut self.black,
            "Result" => &mut self.result,
            "Variant" => &mut self.variant,
            "TimeControl" => &mut self.time_control,
            "ECO" => &mut self.eco,
            "FEN" => {
                self.fen = Some(value);
                return;
            }
            _ => return,
        };
        *slot = value;
    }

    /// Write the record back out as header lines followed by its movetext.
    /// Empty header fields are omitted.
    pub fn to_record_text(&self) -> String {
        let headers = [
            ("Event", self.event.as_str()),
            ("Site", self.site.as_str()),
            ("Date", self.date.as_str()),
            ("White", self.white.as_str()),
            ("Black", self.black.as_str()),
            ("Result", self.result.as_str()),
            ("Variant", self.variant.as_str()),
            ("TimeControl", self.time_control.as_str()),
            ("ECO", self.eco.as_str()),
            ("FEN", self.fen.as_deref().unwrap_or_default()),
        ];

        let mut out = String::new();
        for (key, value) in headers {
            if !value.is_empty() {
                out.push_str(&format!("[{key} \"{}\"]\n", escape_header_value(value)));
            }
        }
        out.push('\n');
        out.push_str(&self.movetext);
        out.push('\n');
        out
    }

    /// The `Date` header as a calendar date, if it is fully specified.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Replay the movetext from the starting position (or the `FEN` header)
    /// and store the resulting coordinate moves.
    ///
    /// On failure `moves` is left untouched and the error names the first
    /// token that could not be resolved.
    pub fn resolve(&mut self) -> Result<Board, ChessErrors> {
        let mut board = match &self.fen {
            Some(fen) => Board::from_fen(fen)?,
            None => Board::new_game(),
        };

        for token in movetext_tokens(&self.movetext)? {
            let legal = board.available_legal_moves().unwrap_or_default();
            let mv = resolve_notation(token, &legal, &board)?;
            trace!(token, %mv, "applying resolved move");
            board.make_move(mv);
        }

        self.moves = board.move_history.clone();
        debug!(
            white = %self.white,
            black = %self.black,
            moves = self.moves.len(),
            "resolved game record"
        );
        Ok(board)
    }
}

/// Split record text into games and read their headers. Movetext is kept
/// raw; call `GameRecord::resolve` to obtain the moves.
pub fn parse_string_games(text: &str) -> Vec<GameRecord> {
    let mut games = Vec::<GameRecord>::new();
    let mut current = GameRecord::default();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !trimmed.starts_with('[') {
            if !current.movetext.is_empty() {
                current.movetext.push(' ');
            }
            current.movetext.push_str(trimmed);
            continue;
        }

        match read_header_line(trimmed) {
            Ok((key, value)) => {
                if key == GAME_START_HEADER && !current.movetext.is_empty() {
                    games.push(std::mem::take(&mut current));
                }
                current.insert_header(&key, value);
            }
            Err(err) => warn!(%err, "skipping header line"),
        }
    }

    if current != GameRecord::default() {
        games.push(current);
    }

    debug!(games = games.len(), "split game records");
    games
}

/// Parse and resolve every game. A game whose movetext cannot be resolved is
/// reported as an error without affecting the others.
pub fn parse_and_resolve(text: &str) -> Vec<Result<GameRecord, ChessErrors>> {
    parse_string_games(text)
        .into_iter()
        .map(|mut game| match game.resolve() {
            Ok(_) => Ok(game),
            Err(err) => {
                warn!(site = %game.site, %err, "abandoning game record");
                Err(err)
            }
        })
        .collect()
}

/// Read a `[Key "Value"]` header line.
pub fn read_header_line(line: &str) -> Result<(String, String), ChessErrors> {
    let invalid = || ChessErrors::InvalidRecord(line.to_owned());

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.trim().split_once(' ').ok_or_else(invalid)?;
    let value_raw = value_raw.trim();

    let value = value_raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;
    Ok((key.to_owned(), value.replace("\\\"", "\"")))
}

/// Movetext tokens that name moves, in order, up to the result token.
pub fn movetext_tokens(movetext: &str) -> Result<Vec<&str>, ChessErrors> {
    let mut tokens = Vec::new();

    for raw in strip_comments_and_variations(movetext)? {
        let token = strip_move_number(raw);
        if token.is_empty() || token.contains('.') || token.starts_with('$') {
            continue;
        }
        if is_result_token(token) {
            break;
        }
        let cleaned = strip_annotations(token);
        if !cleaned.is_empty() {
            tokens.push(cleaned);
        }
    }

    Ok(tokens)
}

/// Whitespace-separated pieces of movetext outside `{...}` and `(...)`.
/// Comments do not nest and their contents are skipped verbatim; variations
/// nest. An unterminated or stray delimiter is an error.
fn strip_comments_and_variations(text: &str) -> Result<Vec<&str>, ChessErrors> {
    let unbalanced =
        || ChessErrors::InvalidRecord(format!("unbalanced comment or variation in `{text}`"));
    let mut spans = Vec::new();
    let mut in_comment = false;
    let mut paren_depth = 0usize;
    let mut span_start = 0usize;

    for (i, ch) in text.char_indices() {
        if in_comment {
            if ch == '}' {
                in_comment = false;
                if paren_depth == 0 {
                    span_start = i + 1;
                }
            }
            continue;
        }
        match ch {
            '{' => {
                if paren_depth == 0 {
                    spans.push(&text[span_start..i]);
                }
                in_comment = true;
            }
            '(' => {
                if paren_depth == 0 {
                    spans.push(&text[span_start..i]);
                }
                paren_depth += 1;
            }
            ')' => match paren_depth {
                0 => return Err(unbalanced()),
                1 => {
                    paren_depth = 0;
                    span_start = i + 1;
                }
                _ => paren_depth -= 1,
            },
            '}' => return Err(unbalanced()),
            _ => {}
        }
    }
    if in_comment || paren_depth > 0 {
        return Err(unbalanced());
    }
    spans.push(&text[span_start..]);

    Ok(spans.into_iter().flat_map(str::split_whitespace).collect())
}

/// `12.e4` and `12...e5` carry the move behind the number.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return token;
    }
    let rest = &token[digits..];
    if rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        token
    }
}

fn escape_header_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}
