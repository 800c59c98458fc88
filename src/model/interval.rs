use serde::Serialize;

use crate::model::{CENTIS_PER_SECOND, GameTime, Lineup, TeamSide};

/// A maximal stretch of the game during which neither lineup changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringInterval {
    pub index: usize,
    pub start: GameTime,
    pub end: GameTime,
    /// Hundredths of a second since tip-off.
    pub start_elapsed: u32,
    pub end_elapsed: u32,
    pub start_time_actual: Option<String>,
    pub end_time_actual: Option<String>,
    pub home_lineup: Lineup,
    pub away_lineup: Lineup,
    pub home_points: i32,
    pub away_points: i32,
    pub plus_minus: i32,
    pub event_count: usize,
}

impl ScoringInterval {
    #[must_use]
    pub fn duration_centis(&self) -> u32 {
        self.end_elapsed.saturating_sub(self.start_elapsed)
    }

    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        f64::from(self.duration_centis()) / f64::from(CENTIS_PER_SECOND)
    }

    #[must_use]
    pub fn lineup(&self, side: TeamSide) -> &Lineup {
        match side {
            TeamSide::Home => &self.home_lineup,
            TeamSide::Away => &self.away_lineup,
        }
    }

    #[must_use]
    pub fn points(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Home => self.home_points,
            TeamSide::Away => self.away_points,
        }
    }
}

/// Flat, spreadsheet-friendly view of one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRow {
    pub game_id: String,
    pub interval: usize,
    pub start_period: u32,
    pub start_clock: String,
    pub end_period: u32,
    pub end_clock: String,
    pub duration_seconds: f64,
    pub home_player_1: String,
    pub home_player_2: String,
    pub home_player_3: String,
    pub home_player_4: String,
    pub home_player_5: String,
    pub away_player_1: String,
    pub away_player_2: String,
    pub away_player_3: String,
    pub away_player_4: String,
    pub away_player_5: String,
    pub home_points: i32,
    pub away_points: i32,
    pub plus_minus: i32,
}

/// Which interval (and therefore which pair of lineups) an event happened under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLineup {
    pub action_number: i64,
    pub period: u32,
    pub clock: String,
    /// Clock text from the feed, kept when it did not parse.
    pub clock_raw: String,
    pub action_type: String,
    pub sub_type: Option<String>,
    pub description: Option<String>,
    pub score_home: i32,
    pub score_away: i32,
    pub interval: usize,
}
