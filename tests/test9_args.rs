mod common;

use clap::Parser;
use common::fixture;
use rusty_hoops::args::validation::{
    check_game_id, check_startup_scripts, check_writable_dir, startup_script_paths,
};
use rusty_hoops::args::{Args, OutputFormat, clean_args};
use rusty_hoops::model::PeriodRules;
use std::fs;

#[test]
fn test9_game_id_validation() {
    assert_eq!(check_game_id("0022400076"), Ok("0022400076".to_string()));
    assert_eq!(check_game_id(" 0022400076 "), Ok("0022400076".to_string()));
    assert!(check_game_id("22400076").is_err());
    assert!(check_game_id("00224000ab").is_err());
}

#[test]
fn test9_file_and_dir_validation() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.sql");
    let b = dir.path().join("b.sql");
    fs::write(&a, "SELECT 1;")?;
    fs::write(&b, "SELECT 2;")?;
    let (a, b) = (a.display().to_string(), b.display().to_string());

    assert!(check_startup_scripts(&format!("{a};{b}")).is_ok());
    assert!(check_startup_scripts(&format!("{a};{}/missing.sql", dir.path().display())).is_err());
    // a directory is not a script
    assert!(check_startup_scripts(&dir.path().display().to_string()).is_err());
    assert!(check_startup_scripts(" ; ").is_err());

    let dir_str = dir.path().display().to_string();
    assert_eq!(check_writable_dir(&dir_str)?, dir.path());
    assert!(check_writable_dir(&a).is_err());
    assert!(check_writable_dir(&format!("{dir_str}/nope")).is_err());
    Ok(())
}

#[test]
fn test9_startup_script_list_is_trimmed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.sql");
    fs::write(&a, "SELECT 1;")?;
    let list = format!(" {} ;", a.display());

    assert_eq!(startup_script_paths(&list), vec![a.clone()]);
    assert!(check_startup_scripts(&list).is_ok());

    let db = dir.path().join("hoops.db").display().to_string();
    let args = Args::try_parse_from([
        "rusty-hoops",
        "-g",
        "0022400076",
        "-f",
        "sqlite",
        "-n",
        db.as_str(),
        "--db-startup-script",
        list.as_str(),
    ])?;
    assert_eq!(clean_args(args)?.combined_sql_script, "SELECT 1;");
    Ok(())
}

#[test]
fn test9_repeated_formats_are_kept_once() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "rusty-hoops",
        "-g",
        "0022400076",
        "-f",
        "csv",
        "-f",
        "json",
        "-f",
        "csv",
        "-f",
        "json",
    ])?;
    let clean = clean_args(args)?;
    assert_eq!(clean.output_formats, vec![OutputFormat::Csv, OutputFormat::Json]);
    Ok(())
}

#[test]
fn test9_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["rusty-hoops", "-g", "0022400076", "-g", "0022400077"])?;
    let clean = clean_args(args)?;

    assert_eq!(clean.game_ids, vec!["0022400076", "0022400077"]);
    assert_eq!(clean.output_formats, vec![OutputFormat::Csv]);
    assert_eq!(clean.concurrency, 4);
    assert_eq!(clean.max_retries, 3);
    assert_eq!(clean.retry_wait_secs, 10);
    assert_eq!(clean.period_rules, PeriodRules::nba());
    assert!(clean.combined_sql_script.is_empty());
    Ok(())
}

#[test]
fn test9_offline_game_and_league() -> Result<(), Box<dyn std::error::Error>> {
    let box_score = fixture("boxscore_sample.json");
    let play_by_play = fixture("playbyplay_sample.json");
    let args = Args::try_parse_from([
        "rusty-hoops",
        "--box-score-json",
        box_score.as_str(),
        "--play-by-play-json",
        play_by_play.as_str(),
        "--league",
        "wnba",
        "-f",
        "json",
        "-f",
        "csv",
    ])?;
    let clean = clean_args(args)?;

    assert!(clean.game_ids.is_empty());
    assert!(clean.box_score_json.is_some());
    assert_eq!(clean.period_rules, PeriodRules::wnba());
    assert_eq!(clean.output_formats, vec![OutputFormat::Json, OutputFormat::Csv]);

    // one offline file without the other is rejected by clap
    assert!(Args::try_parse_from(["rusty-hoops", "--box-score-json", box_score.as_str()]).is_err());
    Ok(())
}

#[test]
fn test9_rejected_combinations() -> Result<(), Box<dyn std::error::Error>> {
    let nothing = Args::try_parse_from(["rusty-hoops"])?;
    assert!(clean_args(nothing).is_err());

    let no_db = Args::try_parse_from(["rusty-hoops", "-g", "0022400076", "-f", "sqlite"])?;
    assert!(clean_args(no_db).is_err());

    assert!(Args::try_parse_from(["rusty-hoops", "-g", "0022400076", "-c", "0"]).is_err());
    assert!(Args::try_parse_from(["rusty-hoops", "-g", "abc"]).is_err());
    Ok(())
}

#[test]
fn test9_startup_scripts_are_combined() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.sql");
    let b = dir.path().join("b.sql");
    fs::write(&a, "CREATE TABLE a (x);")?;
    fs::write(&b, "CREATE TABLE b (y);")?;
    let scripts = format!("{};{}", a.display(), b.display());
    let db = dir.path().join("hoops.db").display().to_string();

    let args = Args::try_parse_from([
        "rusty-hoops",
        "-g",
        "0022400076",
        "-f",
        "sqlite",
        "-n",
        db.as_str(),
        "--db-startup-script",
        scripts.as_str(),
    ])?;
    let clean = clean_args(args)?;
    assert_eq!(clean.combined_sql_script, "CREATE TABLE a (x);\nCREATE TABLE b (y);");
    assert_eq!(clean.db_name.as_deref(), Some(db.as_str()));
    Ok(())
}
