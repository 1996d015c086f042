//! Where game record text comes from.
//!
//! The record parser only ever sees raw text; `GameSource` is the boundary
//! that produces it for a user and a look-back window.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Days, NaiveDate, Utc};
use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::utils::pgn::parse_string_games;

/// Remote endpoint listing a user's rated blitz, rapid and classical games.
pub const GAMES_ENDPOINT: &str = "https://lichess.org/api/games/user";

pub trait GameSource {
    /// Record text for every game `user` played in the last `days_ago` days.
    fn fetch(&self, user: &str, days_ago: u32) -> Result<String, ChessErrors>;
}

fn window_start(now: DateTime<Utc>, days_ago: u32) -> Result<DateTime<Utc>, ChessErrors> {
    now.checked_sub_days(Days::new(u64::from(days_ago)))
        .ok_or_else(|| ChessErrors::SourceUnavailable(format!("{days_ago} days is out of range")))
}

/// Start of the look-back window as Unix milliseconds.
pub fn since_timestamp_millis(now: DateTime<Utc>, days_ago: u32) -> Result<i64, ChessErrors> {
    window_start(now, days_ago).map(|start| start.timestamp_millis())
}

pub fn games_url(user: &str, since_millis: i64) -> String {
    format!("{GAMES_ENDPOINT}/{user}?since={since_millis}&perfType=blitz,rapid,classical")
}

/// Serves games out of record text already in memory, filtering by player
/// and by the `Date` header.
#[derive(Debug, Clone)]
pub struct RecordTextSource {
    text: String,
    now: DateTime<Utc>,
}

impl RecordTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_clock(text, Utc::now())
    }

    /// Same as `new`, measuring the window from `now` instead of the wall clock.
    pub fn with_clock(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            now,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ChessErrors> {
        let text = fs::read_to_string(path)
            .map_err(|err| ChessErrors::SourceUnavailable(format!("{}: {err}", path.display())))?;
        Ok(Self::new(text))
    }
}

impl GameSource for RecordTextSource {
    fn fetch(&self, user: &str, days_ago: u32) -> Result<String, ChessErrors> {
        let since: NaiveDate = window_start(self.now, days_ago)?.date_naive();

        let games: Vec<String> = parse_string_games(&self.text)
            .into_iter()
            .filter(|game| game.white == user || game.black == user)
            .filter(|game| game.date().is_some_and(|date| date >= since))
            .map(|game| game.to_record_text())
            .collect();

        debug!(user, days_ago, %since, games = games.len(), "fetched game records");
        Ok(games.join("\n"))
    }
}
