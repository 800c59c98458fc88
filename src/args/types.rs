use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

use crate::model::PeriodRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    Sqlite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum League {
    Nba,
    Wnba,
}

impl League {
    #[must_use]
    pub fn period_rules(self) -> PeriodRules {
        match self {
            League::Nba => PeriodRules::nba(),
            League::Wnba => PeriodRules::wnba(),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Rebuild on-court lineups and plus/minus intervals from play-by-play", long_about = None)]
pub struct Args {
    /// Game id to fetch from the live-data CDN, e.g. 0022400076. Repeatable.
    #[arg(short = 'g', long = "game-id", value_name = "GAME_ID", value_parser = crate::args::validation::check_game_id)]
    pub game_ids: Vec<String>,

    /// Box score JSON on disk, for a single offline game. Needs --play-by-play-json.
    #[arg(
        long,
        value_name = "BOX_SCORE_JSON",
        requires = "play_by_play_json",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub box_score_json: Option<Value>,

    /// Play-by-play JSON on disk, for a single offline game. Needs --box-score-json.
    #[arg(
        long,
        value_name = "PLAY_BY_PLAY_JSON",
        requires = "box_score_json",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub play_by_play_json: Option<Value>,

    /// Where to write results. Repeatable.
    #[arg(short = 'f', long = "output-format", value_enum, default_values_t = [OutputFormat::Csv])]
    pub output_formats: Vec<OutputFormat>,

    /// Directory for csv and json output.
    #[arg(
        short = 'o',
        long,
        value_name = "OUTPUT_DIR",
        default_value = ".",
        value_parser = crate::args::validation::check_writable_dir
    )]
    pub output_dir: PathBuf,

    /// SQLite filename. Required for sqlite output.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: Option<String>,

    /// If specified, this sql is run before loading. Several files may be separated by ';'.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = crate::args::validation::check_startup_scripts)]
    pub db_startup_script: Option<String>,

    /// Period lengths used for elapsed time.
    #[arg(short = 'l', long, value_enum, default_value_t = League::Nba)]
    pub league: League,

    /// Games fetched and rebuilt at the same time.
    #[arg(short = 'c', long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Retries after an HTTP 429 before giving up on a request.
    #[arg(long, default_value_t = 3)]
    pub max_retries: u32,

    /// Seconds to wait after a 429 when the server sends no Retry-After.
    #[arg(long, default_value_t = 10)]
    pub retry_wait_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub game_ids: Vec<String>,
    pub box_score_json: Option<Value>,
    pub play_by_play_json: Option<Value>,
    pub output_formats: Vec<OutputFormat>,
    pub output_dir: PathBuf,
    pub db_name: Option<String>,
    pub db_startup_script: Option<String>,
    pub combined_sql_script: String,
    pub period_rules: PeriodRules,
    pub concurrency: usize,
    pub max_retries: u32,
    pub retry_wait_secs: u64,
}
