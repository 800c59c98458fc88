use rusty_hoops::args::{self, CleanArgs, OutputFormat};
use rusty_hoops::controller::nba::{GameOutcome, GameSource, NbaClient, process_games};
use rusty_hoops::error::AppError;
use rusty_hoops::storage::{SqliteStore, write_outcomes};

use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("rusty_hoops=info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let sources = game_sources(&args)?;
    let client = NbaClient::new(args.max_retries, Duration::from_secs(args.retry_wait_secs))?;
    let outcomes = process_games(sources, &client, args.period_rules, args.concurrency).await;

    let failed = write_outputs(&args, &outcomes)?;
    if failed > 0 {
        error!(failed, total = outcomes.len(), "some games could not be reconstructed");
        std::process::exit(1);
    }
    Ok(())
}

fn game_sources(args: &CleanArgs) -> Result<Vec<GameSource>, AppError> {
    let mut sources: Vec<GameSource> = args
        .game_ids
        .iter()
        .map(|game_id| GameSource::Remote {
            game_id: game_id.clone(),
        })
        .collect();
    if let (Some(box_score), Some(play_by_play)) = (&args.box_score_json, &args.play_by_play_json) {
        sources.push(GameSource::from_json(box_score.clone(), play_by_play.clone())?);
    }
    Ok(sources)
}

/// Opens the database when SQLite output is requested, then writes every
/// game and returns how many failed.
fn write_outputs(args: &CleanArgs, outcomes: &[GameOutcome]) -> Result<usize, AppError> {
    let mut store = match (&args.db_name, args.output_formats.contains(&OutputFormat::Sqlite)) {
        (Some(db_name), true) => {
            let store = SqliteStore::open(db_name)?;
            if !args.combined_sql_script.is_empty() {
                store.run_script(&args.combined_sql_script)?;
            }
            Some(store)
        }
        _ => None,
    };
    Ok(write_outcomes(
        outcomes,
        &args.output_formats,
        &args.output_dir,
        store.as_mut(),
    ))
}
