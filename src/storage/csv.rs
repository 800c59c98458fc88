use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::controller::reconstruct::GameReconstruction;
use crate::controller::summary::{LineupSummary, lineup_summaries, player_summaries};
use crate::error::AppError;
use crate::model::TeamSide;

/// Lineup summary with the id list flattened, since CSV cells hold scalars.
#[derive(Debug, Serialize)]
struct LineupCsvRow<'a> {
    game_id: &'a str,
    side: TeamSide,
    players: &'a str,
    player_ids: String,
    seconds_together: f64,
    intervals: usize,
    points_for: i32,
    points_against: i32,
    plus_minus: i32,
}

impl<'a> From<&'a LineupSummary> for LineupCsvRow<'a> {
    fn from(s: &'a LineupSummary) -> Self {
        Self {
            game_id: &s.game_id,
            side: s.side,
            players: &s.players,
            player_ids: s
                .player_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            seconds_together: s.seconds_together,
            intervals: s.intervals,
            points_for: s.points_for,
            points_against: s.points_against,
            plus_minus: s.plus_minus,
        }
    }
}

/// Writes `rows` with a header line taken from the field names.
///
/// # Errors
///
/// Will return `Err` if the file cannot be created or a row cannot be written
pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes intervals, player and lineup summaries, and the event timeline as
/// `{game_id}_*.csv` under `dir`. Returns the paths written.
///
/// # Errors
///
/// Will return `Err` if any file cannot be written
pub fn write_game_csv(dir: &Path, recon: &GameReconstruction) -> Result<Vec<PathBuf>, AppError> {
    let game_id = recon.game_id();
    let path_for = |suffix: &str| dir.join(format!("{game_id}_{suffix}.csv"));

    let intervals_path = path_for("intervals");
    write_rows(&intervals_path, &recon.rows())?;

    let players_path = path_for("players");
    write_rows(&players_path, &player_summaries(&recon.intervals, &recon.roster))?;

    let lineups = lineup_summaries(&recon.intervals, &recon.roster);
    let lineup_rows: Vec<LineupCsvRow> = lineups.iter().map(LineupCsvRow::from).collect();
    let lineups_path = path_for("lineups");
    write_rows(&lineups_path, &lineup_rows)?;

    let timeline_path = path_for("timeline");
    write_rows(&timeline_path, &recon.timeline)?;

    Ok(vec![intervals_path, players_path, lineups_path, timeline_path])
}
