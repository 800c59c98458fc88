mod common;

use common::{GAME_ID, rebuild, ten_event_game};
use rusty_hoops::GameOutcome;
use rusty_hoops::args::OutputFormat;
use rusty_hoops::error::AppError;
use rusty_hoops::storage::{SqliteStore, write_game_csv, write_game_json, write_outcomes};
use std::fs;

#[test]
fn test7_csv_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let recon = rebuild(ten_event_game())?;

    let paths = write_game_csv(dir.path(), &recon)?;
    assert_eq!(paths.len(), 4);
    for suffix in ["intervals", "players", "lineups", "timeline"] {
        assert!(dir.path().join(format!("{GAME_ID}_{suffix}.csv")).is_file(), "{suffix} missing");
    }

    let mut reader = csv::Reader::from_path(dir.path().join(format!("{GAME_ID}_intervals.csv")))?;
    let headers = reader.headers()?.clone();
    assert_eq!(&headers[0], "game_id");
    assert_eq!(&headers[7], "home_player_1");
    assert_eq!(&headers[19], "plus_minus");
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 2);
    assert_eq!(&records[1][7], "home player 6");
    assert_eq!(&records[1][19], "0");

    let mut reader = csv::Reader::from_path(dir.path().join(format!("{GAME_ID}_lineups.csv")))?;
    let first = reader.records().next().ok_or("no lineup rows")??;
    assert_eq!(&first[1], "home");
    assert_eq!(&first[3], "2;3;4;5;6");

    let timeline = fs::read_to_string(dir.path().join(format!("{GAME_ID}_timeline.csv")))?;
    // header plus one line per event
    assert_eq!(timeline.lines().count(), 11);
    Ok(())
}

#[test]
fn test7_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let recon = rebuild(ten_event_game())?;

    let path = write_game_json(dir.path(), &recon)?;
    assert_eq!(path, dir.path().join(format!("{GAME_ID}_reconstruction.json")));

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(report["game_id"], GAME_ID);
    assert_eq!(report["home"]["tricode"], "LAL");
    assert_eq!(report["intervals"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["rows"][1]["plus_minus"], 0);
    assert_eq!(report["players"].as_array().map(Vec::len), Some(11));
    assert_eq!(report["timeline"].as_array().map(Vec::len), Some(10));
    assert_eq!(report["anomalies"].as_array().map(Vec::len), Some(0));
    assert!(report["generated_at"].is_string());
    Ok(())
}

#[test]
fn test7_anomalies_serialize_with_kind() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut events = ten_event_game();
    events[4].person_id = Some(rusty_hoops::model::PlayerId(8));
    let recon = rebuild(events)?;

    let path = write_game_json(dir.path(), &recon)?;
    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let kinds: Vec<&str> = report["anomalies"]
        .as_array()
        .ok_or("anomalies is not a list")?
        .iter()
        .filter_map(|a| a["kind"].as_str())
        .collect();
    assert_eq!(kinds, vec!["sub_out_not_on_court", "sub_in_lineup_full"]);
    Ok(())
}

#[test]
fn test7_write_failure_does_not_stop_later_games() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    // the id points into a directory that does not exist, so its files cannot be created
    let mut unwritable = rebuild(ten_event_game())?;
    unwritable.roster.game_id = "missing/0022400077".to_string();
    let outcomes = vec![
        GameOutcome {
            game_id: "missing/0022400077".to_string(),
            result: Ok(unwritable),
        },
        GameOutcome {
            game_id: "0022400078".to_string(),
            result: Err(AppError::NotFound("0022400078".to_string())),
        },
        GameOutcome {
            game_id: GAME_ID.to_string(),
            result: Ok(rebuild(ten_event_game())?),
        },
    ];
    let mut store = SqliteStore::open_in_memory()?;
    let formats = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Sqlite];

    let failed = write_outcomes(&outcomes, &formats, dir.path(), Some(&mut store));
    assert_eq!(failed, 2);
    assert!(dir.path().join(format!("{GAME_ID}_timeline.csv")).is_file());
    assert!(dir.path().join(format!("{GAME_ID}_reconstruction.json")).is_file());
    assert_eq!(store.game_count()?, 1);
    assert_eq!(store.load_intervals(GAME_ID)?.len(), 2);
    Ok(())
}
