use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use chess_notary::board::board::Board;
use chess_notary::board::chess_rules::STARTING_POSITION_FEN;
use chess_notary::chess_errors::ChessErrors;
use chess_notary::move_generation::perft::{perft, perft_divide};
use chess_notary::service::game_source::{
    games_url, since_timestamp_millis, GameSource, RecordTextSource,
};
use chess_notary::service::game_stats::obtain_game_stats;
use chess_notary::service::make_move::make_move;
use chess_notary::utils::pgn::parse_string_games;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the status and legal moves of a position
    Fen {
        #[clap(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
    },
    /// Validate and apply one coordinate move, printing the new position as JSON
    Move {
        #[clap(long)]
        fen: String,
        /// Coordinate move such as e2e4 or e7e8Q
        #[clap(value_name = "MOVE")]
        mv: String,
    },
    /// Resolve every game in a record file into coordinate moves
    Pgn {
        #[clap(value_name = "PATH")]
        path: PathBuf,
    },
    /// Aggregate a player's results from a record file
    Stats {
        #[clap(value_name = "PATH")]
        path: PathBuf,
        #[clap(long)]
        user: String,
        /// Only count the player's games from the last N days
        #[clap(long, value_name = "N")]
        days: Option<u32>,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[clap(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[clap(long, default_value = "3")]
        depth: u8,
        /// Print the node count below each root move before the total
        #[clap(long)]
        divide: bool,
    },
    /// Print the remote request URL for a player's recent games
    GamesUrl {
        #[clap(long)]
        user: String,
        #[clap(long, value_name = "N", default_value = "7")]
        days: u32,
    },
    /// Draw the board
    Show {
        #[clap(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
    },
}

fn read_records(path: &Path) -> Result<String, ChessErrors> {
    fs::read_to_string(path)
        .map_err(|err| ChessErrors::SourceUnavailable(format!("{}: {err}", path.display())))
}

/// JSON shape of a failed command; an illegal move also lists the legal moves.
fn error_report(err: &ChessErrors) -> Value {
    match err {
        ChessErrors::IllegalMove { legal_moves, .. } => {
            json!({ "error": err.to_string(), "legal_moves": legal_moves })
        }
        _ => json!({ "error": err.to_string() }),
    }
}

fn perft_report(board: &Board, depth: u8, divide: bool) -> Vec<String> {
    if !divide {
        return vec![perft(board, depth).to_string()];
    }
    let divided = perft_divide(board, depth);
    let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
    let mut lines: Vec<String> = divided
        .into_iter()
        .map(|(mv, nodes)| format!("{mv}: {nodes}"))
        .collect();
    lines.push(String::new());
    lines.push(total.to_string());
    lines
}

fn run(command: Command) -> Result<(), ChessErrors> {
    match command {
        Command::Fen { fen } => {
            let board = Board::from_fen(&fen)?;
            let legal: Vec<String> = board
                .available_legal_moves()
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string)
                .collect();
            let report = json!({ "fen": board.fen(), "status": board.status(), "legal_moves": legal });
            println!("{report}");
        }
        Command::Move { fen, mv } => {
            let response =
                make_move(&mv, &fen).inspect_err(|err| println!("{}", error_report(err)))?;
            println!("{}", json!(response));
        }
        Command::Pgn { path } => {
            let text = read_records(&path)?;
            for mut game in parse_string_games(&text) {
                let line = match game.resolve() {
                    Ok(board) => json!({ "game": game, "final_fen": board.fen() }),
                    Err(err) => json!({ "game": game, "error": err.to_string() }),
                };
                println!("{line}");
            }
        }
        Command::Stats { path, user, days } => {
            let text = match days {
                Some(days) => RecordTextSource::from_file(&path)?.fetch(&user, days)?,
                None => read_records(&path)?,
            };
            let games = parse_string_games(&text);
            println!("{}", json!(obtain_game_stats(&user, &games)));
        }
        Command::Perft { fen, depth, divide } => {
            let board = Board::from_fen(&fen)?;
            for line in perft_report(&board, depth, divide) {
                println!("{line}");
            }
        }
        Command::GamesUrl { user, days } => {
            let since = since_timestamp_millis(Utc::now(), days)?;
            println!("{}", games_url(&user, since));
        }
        Command::Show { fen } => {
            let board = Board::from_fen(&fen)?;
            println!("{board}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_report_lists_the_legal_moves() {
        let err = make_move("e2e5", STARTING_POSITION_FEN).expect_err("e2e5 is illegal");
        let report = error_report(&err);

        assert_eq!(report["error"], "e2e5 is not a legal move");
        let legal = report["legal_moves"].as_array().expect("legal moves are listed");
        assert_eq!(legal.len(), 20);
        assert!(legal.iter().any(|mv| mv == "g1f3"));
    }

    #[test]
    fn other_errors_report_only_the_message() {
        let err = make_move("e2e4", "not a fen").expect_err("FEN is malformed");
        let report = error_report(&err);
        assert!(report["error"].is_string());
        assert!(report.get("legal_moves").is_none());
    }

    #[test]
    fn perft_divide_lines_end_with_the_total() {
        let board = Board::new_game();
        let lines = perft_report(&board, 2, true);

        assert_eq!(lines.len(), 22);
        assert!(lines.contains(&"e2e4: 20".to_owned()));
        assert_eq!(lines.last().map(String::as_str), Some("400"));
        assert_eq!(perft_report(&board, 2, false), vec!["400".to_owned()]);
    }

    #[test]
    fn cli_accepts_divide_and_games_url() {
        let cli = Cli::try_parse_from(["chess_notary", "perft", "--depth", "2", "--divide"])
            .expect("perft arguments parse");
        assert!(matches!(cli.command, Command::Perft { depth: 2, divide: true, .. }));

        let cli = Cli::try_parse_from(["chess_notary", "games-url", "--user", "EddyRob"])
            .expect("games-url arguments parse");
        assert!(matches!(cli.command, Command::GamesUrl { days: 7, .. }));
    }
}
