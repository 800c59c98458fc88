use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::controller::reconstruct::GameReconstruction;
use crate::controller::summary::{LineupSummary, PlayerSummary, lineup_summaries, player_summaries};
use crate::error::AppError;
use crate::model::{Anomaly, EventLineup, IntervalRow, ScoringInterval, TeamInfo};

#[derive(Debug, Serialize)]
pub struct GameReport<'a> {
    pub game_id: &'a str,
    pub generated_at: String,
    pub home: &'a TeamInfo,
    pub away: &'a TeamInfo,
    pub intervals: &'a [ScoringInterval],
    pub rows: Vec<IntervalRow>,
    pub players: Vec<PlayerSummary>,
    pub lineups: Vec<LineupSummary>,
    pub timeline: &'a [EventLineup],
    pub anomalies: &'a [Anomaly],
}

#[must_use]
pub fn game_report(recon: &GameReconstruction) -> GameReport<'_> {
    GameReport {
        game_id: recon.game_id(),
        generated_at: Utc::now().to_rfc3339(),
        home: &recon.roster.home,
        away: &recon.roster.away,
        intervals: &recon.intervals,
        rows: recon.rows(),
        players: player_summaries(&recon.intervals, &recon.roster),
        lineups: lineup_summaries(&recon.intervals, &recon.roster),
        timeline: &recon.timeline,
        anomalies: &recon.anomalies,
    }
}

/// # Errors
///
/// Will return `Err` if the report cannot be serialized or written
pub fn write_game_json(dir: &Path, recon: &GameReconstruction) -> Result<PathBuf, AppError> {
    let path = dir.join(format!("{}_reconstruction.json", recon.game_id()));
    let body = serde_json::to_string_pretty(&game_report(recon))?;
    fs::write(&path, body)?;
    Ok(path)
}
