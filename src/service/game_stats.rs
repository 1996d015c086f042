//! Per-user aggregates over parsed game records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::board::chess_types::Color;
use crate::utils::pgn::GameRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameStats {
    /// Share of available points scored, a draw counting half.
    pub win_percentage: f64,
    pub loss_percentage: f64,
    /// Share of games per opening code, in percent.
    pub eco_percentage: BTreeMap<String, f64>,
    pub most_played_color: Color,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            win_percentage: 0.0,
            loss_percentage: 0.0,
            eco_percentage: BTreeMap::new(),
            most_played_color: Color::White,
        }
    }
}

pub fn obtain_game_stats(user: &str, games: &[GameRecord]) -> GameStats {
    if games.is_empty() {
        return GameStats::default();
    }

    let total = games.len() as f64;
    let mut points = 0.0;
    let mut eco_counts = BTreeMap::<String, usize>::new();
    let mut as_white = 0usize;
    let mut as_black = 0usize;

    for game in games {
        points += score_for(user, game);
        *eco_counts.entry(game.eco.clone()).or_default() += 1;
        if game.white == user {
            as_white += 1;
        } else if game.black == user {
            as_black += 1;
        }
    }

    let win_percentage = points / total * 100.0;
    GameStats {
        win_percentage,
        loss_percentage: 100.0 - win_percentage,
        eco_percentage: eco_counts
            .into_iter()
            .map(|(eco, count)| (eco, count as f64 / total * 100.0))
            .collect(),
        most_played_color: if as_black > as_white {
            Color::Black
        } else {
            Color::White
        },
    }
}

fn score_for(user: &str, game: &GameRecord) -> f64 {
    match game.result.as_str() {
        "1/2-1/2" => 0.5,
        "1-0" if game.white == user => 1.0,
        "0-1" if game.black == user => 1.0,
        _ => 0.0,
    }
}
