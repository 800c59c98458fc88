use tracing::debug;

use crate::controller::reconstruct::state::LineupState;
use crate::model::{GameEvent, GameTime, Lineup, PeriodRules, Score, ScoringInterval, TeamSide};

#[derive(Debug, Clone)]
struct OpenInterval {
    start: GameTime,
    start_elapsed: u32,
    start_time_actual: Option<String>,
    baseline: Score,
    home_lineup: Lineup,
    away_lineup: Lineup,
    event_count: usize,
}

/// Cuts the event stream into scoring intervals at every lineup change.
///
/// The running score comes from plays only. A substitution logged between two
/// free throws carries the score from before the second attempt, and ordering
/// moves it after that attempt.
#[derive(Debug, Clone)]
pub struct IntervalAccumulator {
    rules: PeriodRules,
    score: Score,
    open: Option<OpenInterval>,
    closed: Vec<ScoringInterval>,
}

impl IntervalAccumulator {
    #[must_use]
    pub fn new(rules: PeriodRules) -> Self {
        Self {
            rules,
            score: Score::default(),
            open: None,
            closed: Vec::new(),
        }
    }

    /// Assigns `event` to the open interval (opening the first one on the
    /// first call) and returns that interval's index.
    pub fn observe(&mut self, event: &GameEvent, state: &LineupState) -> usize {
        if self.open.is_none() || !event.kind.is_substitution() {
            self.score = event.score;
        }
        let (rules, score) = (self.rules, self.score);
        let open = self
            .open
            .get_or_insert_with(|| open_at(event, state, &rules, score));
        open.event_count += 1;
        self.closed.len()
    }

    /// Closes the open interval at `event`, which already belongs to it, and
    /// opens the next one there with the lineups now in `state`.
    pub fn lineup_changed(&mut self, event: &GameEvent, state: &LineupState) {
        if let Some(open) = self.open.take() {
            let interval = self.close(open, event);
            self.closed.push(interval);
        }
        self.open = Some(open_at(event, state, &self.rules, self.score));
    }

    /// Force-closes the last interval at the final event. An interval opened
    /// by a lineup change at the final event holds no events and is dropped.
    #[must_use]
    pub fn finish(mut self, last: Option<&GameEvent>) -> Vec<ScoringInterval> {
        if let (Some(open), Some(last)) = (self.open.take(), last) {
            if open.event_count == 0 && !self.closed.is_empty() {
                return self.closed;
            }
            let interval = self.close(open, last);
            self.closed.push(interval);
        }
        self.closed
    }

    fn close(&self, open: OpenInterval, at: &GameEvent) -> ScoringInterval {
        let home_points = self.score.home - open.baseline.home;
        let away_points = self.score.away - open.baseline.away;
        let interval = ScoringInterval {
            index: self.closed.len(),
            start: open.start,
            end: at.time(),
            start_elapsed: open.start_elapsed,
            end_elapsed: at.time().elapsed(&self.rules),
            start_time_actual: open.start_time_actual,
            end_time_actual: at.time_actual.clone(),
            home_lineup: open.home_lineup,
            away_lineup: open.away_lineup,
            home_points,
            away_points,
            plus_minus: home_points - away_points,
            event_count: open.event_count,
        };
        debug!(
            index = interval.index,
            start = %interval.start,
            end = %interval.end,
            plus_minus = interval.plus_minus,
            "closed interval"
        );
        interval
    }
}

fn open_at(
    event: &GameEvent,
    state: &LineupState,
    rules: &PeriodRules,
    baseline: Score,
) -> OpenInterval {
    OpenInterval {
        start: event.time(),
        start_elapsed: event.time().elapsed(rules),
        start_time_actual: event.time_actual.clone(),
        baseline,
        home_lineup: state.lineup(TeamSide::Home).clone(),
        away_lineup: state.lineup(TeamSide::Away).clone(),
        event_count: 0,
    }
}
