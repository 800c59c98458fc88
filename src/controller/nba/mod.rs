pub mod client;
pub mod processing;

pub use client::*;
pub use processing::*;

use futures::future::join_all;
use serde_json::Value;
use tracing::{error, info};

use crate::controller::reconstruct::{GameReconstruction, reconstruct_game};
use crate::error::AppError;
use crate::model::payload::{BoxScorePayload, PlayByPlayPayload};
use crate::model::{AnomalyLog, PeriodRules};

/// Where one game's payloads come from.
#[derive(Debug, Clone)]
pub enum GameSource {
    Remote {
        game_id: String,
    },
    Local {
        game_id: String,
        box_score: BoxScorePayload,
        play_by_play: PlayByPlayPayload,
    },
}

impl GameSource {
    /// Wraps already-parsed JSON documents. The game id comes from the box
    /// score's `gameId`, then the play-by-play's, else `"local"`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if either document does not have the expected shape
    pub fn from_json(box_score: Value, play_by_play: Value) -> Result<Self, AppError> {
        let box_score: BoxScorePayload = serde_json::from_value(box_score)?;
        let play_by_play: PlayByPlayPayload = serde_json::from_value(play_by_play)?;
        let game_id = box_score
            .game
            .as_ref()
            .and_then(|g| g.game_id.clone())
            .or_else(|| play_by_play.game.as_ref().and_then(|g| g.game_id.clone()))
            .unwrap_or_else(|| "local".to_string());
        Ok(GameSource::Local {
            game_id,
            box_score,
            play_by_play,
        })
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        match self {
            GameSource::Remote { game_id } | GameSource::Local { game_id, .. } => game_id,
        }
    }
}

#[derive(Debug)]
pub struct GameOutcome {
    pub game_id: String,
    pub result: Result<GameReconstruction, AppError>,
}

/// Roster + events from the two payloads, then the full reconstruction.
///
/// # Errors
///
/// Will return `Err` if either payload is malformed
pub fn reconstruct_from_payloads(
    game_id: &str,
    box_score: &BoxScorePayload,
    play_by_play: &PlayByPlayPayload,
    rules: PeriodRules,
) -> Result<GameReconstruction, AppError> {
    let mut anomalies = AnomalyLog::new(game_id);
    let roster = roster_from_box_score(game_id, box_score, &mut anomalies)?;
    let events = events_from_play_by_play(game_id, play_by_play, &mut anomalies)?;
    reconstruct_game(roster, events, rules, anomalies)
}

/// # Errors
///
/// Will return `Err` if fetching fails or the payloads are malformed
pub async fn load_game(
    source: GameSource,
    client: &NbaClient,
    rules: PeriodRules,
) -> Result<GameReconstruction, AppError> {
    match source {
        GameSource::Remote { game_id } => {
            let (box_score, play_by_play) = tokio::try_join!(
                client.fetch_box_score(&game_id),
                client.fetch_play_by_play(&game_id)
            )?;
            reconstruct_from_payloads(&game_id, &box_score, &play_by_play, rules)
        }
        GameSource::Local {
            game_id,
            box_score,
            play_by_play,
        } => reconstruct_from_payloads(&game_id, &box_score, &play_by_play, rules),
    }
}

/// Runs up to `concurrency` games at a time, one task per game. A failed game
/// is reported in its outcome and does not affect the others.
pub async fn process_games(
    sources: Vec<GameSource>,
    client: &NbaClient,
    rules: PeriodRules,
    concurrency: usize,
) -> Vec<GameOutcome> {
    let mut outcomes = Vec::with_capacity(sources.len());

    for group in sources.chunks(concurrency.max(1)) {
        let mut tasks = Vec::with_capacity(group.len());
        for source in group.iter().cloned() {
            let client = client.clone();
            let game_id = source.game_id().to_string();
            let task = tokio::task::spawn(async move { load_game(source, &client, rules).await });
            tasks.push((game_id, task));
        }

        let (game_ids, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();
        for (game_id, joined) in game_ids.into_iter().zip(join_all(handles).await) {
            let result = joined
                .map_err(|e| AppError::Other(format!("game task failed: {e}")))
                .and_then(|r| r);
            match &result {
                Ok(recon) => {
                    info!(game_id = %game_id, intervals = recon.intervals.len(), "game done");
                }
                Err(err) => error!(game_id = %game_id, "game failed: {err}"),
            }
            outcomes.push(GameOutcome { game_id, result });
        }
    }

    outcomes
}
