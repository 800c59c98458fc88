pub mod types;
pub mod validation;

use clap::Parser;
use std::fs;

pub use types::*;
use validation::startup_script_paths;

/// Parses the command line and checks flag combinations clap cannot express.
///
/// # Errors
///
/// Will return `Err` if there is nothing to process, sqlite output has no
/// database, or a startup script cannot be read
pub fn args_checks() -> Result<CleanArgs, String> {
    clean_args(Args::parse())
}

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent
pub fn clean_args(args: Args) -> Result<CleanArgs, String> {
    if args.game_ids.is_empty() && args.box_score_json.is_none() {
        return Err(
            "Nothing to do: pass --game-id or --box-score-json with --play-by-play-json."
                .to_string(),
        );
    }
    if args.output_formats.contains(&OutputFormat::Sqlite) && args.db_name.is_none() {
        return Err("--db-name is required for sqlite output.".to_string());
    }

    let combined_sql_script = match &args.db_startup_script {
        Some(files) => startup_script_paths(files)
            .iter()
            .map(|f| {
                fs::read_to_string(f)
                    .map_err(|e| format!("Could not read '{}': {e}", f.display()))
            })
            .collect::<Result<Vec<_>, _>>()?
            .join("\n"),
        None => String::new(),
    };

    // first mention wins; `-f csv -f json -f csv` writes csv once
    let mut output_formats: Vec<OutputFormat> = Vec::with_capacity(args.output_formats.len());
    for format in args.output_formats {
        if !output_formats.contains(&format) {
            output_formats.push(format);
        }
    }

    Ok(CleanArgs {
        game_ids: args.game_ids,
        box_score_json: args.box_score_json,
        play_by_play_json: args.play_by_play_json,
        output_formats,
        output_dir: args.output_dir,
        db_name: args.db_name,
        db_startup_script: args.db_startup_script,
        combined_sql_script,
        period_rules: args.league.period_rules(),
        concurrency: usize::from(args.concurrency),
        max_retries: args.max_retries,
        retry_wait_secs: args.retry_wait_secs,
    })
}
