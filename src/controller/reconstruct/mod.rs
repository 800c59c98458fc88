pub mod accumulator;
pub mod free_throw;
pub mod ordering;
pub mod projection;
pub mod state;

use tracing::{info, warn};

use crate::error::AppError;
use crate::model::{
    Anomaly, AnomalyLog, EventLineup, GameEvent, IntervalRow, PeriodRules, Roster,
    ScoringInterval,
};
use accumulator::IntervalAccumulator;
use free_throw::FreeThrowBuffer;
use state::LineupState;

pub use ordering::{carry_scores, compare_events, normalize_clock, order_events};
pub use projection::project_intervals;

/// Everything derived from one game's box score and play-by-play.
#[derive(Debug, Clone)]
pub struct GameReconstruction {
    pub roster: Roster,
    pub intervals: Vec<ScoringInterval>,
    pub timeline: Vec<EventLineup>,
    pub anomalies: Vec<Anomaly>,
}

impl GameReconstruction {
    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.roster.game_id
    }

    #[must_use]
    pub fn rows(&self) -> Vec<IntervalRow> {
        project_intervals(&self.intervals, &self.roster)
    }
}

/// Orders `events`, fills missing scores in that order, and folds them into
/// intervals.
///
/// # Errors
///
/// Will return `Err` if there are no events to fold.
pub fn reconstruct_game(
    roster: Roster,
    events: Vec<GameEvent>,
    rules: PeriodRules,
    anomalies: AnomalyLog,
) -> Result<GameReconstruction, AppError> {
    let ordered = carry_scores(order_events(events));
    fold_events(roster, &ordered, rules, anomalies)
}

/// Folds events that are already in chronological order.
///
/// Substitutions sharing a timestamp are applied together at the last of
/// them; substitutions recorded during a free-throw sequence are applied at
/// the attempt that ends it.
///
/// # Errors
///
/// Will return `Err` if `ordered` is empty.
pub fn fold_events(
    roster: Roster,
    ordered: &[GameEvent],
    rules: PeriodRules,
    mut anomalies: AnomalyLog,
) -> Result<GameReconstruction, AppError> {
    if ordered.is_empty() {
        return Err(AppError::malformed(&roster.game_id, "play-by-play has no actions"));
    }

    let mut state = LineupState::from_roster(&roster);
    let mut accumulator = IntervalAccumulator::new(rules);
    let mut free_throws = FreeThrowBuffer::default();
    let mut batch: Vec<GameEvent> = Vec::new();
    let mut timeline = Vec::with_capacity(ordered.len());

    for (i, event) in ordered.iter().enumerate() {
        let interval = accumulator.observe(event, &state);
        timeline.push(projection::event_lineup(event, interval));

        if event.kind.is_substitution() {
            if free_throws.in_progress() {
                free_throws.hold(event.clone());
                continue;
            }
            batch.push(event.clone());
            let batch_continues = ordered
                .get(i + 1)
                .is_some_and(|next| next.kind.is_substitution() && next.time() == event.time());
            if !batch_continues {
                let subs = std::mem::take(&mut batch);
                if state.apply_batch(&subs, &roster, &mut anomalies) {
                    accumulator.lineup_changed(event, &state);
                }
            }
            continue;
        }

        if let Some(subs) = free_throws.observe(event, &mut anomalies) {
            if state.apply_batch(&subs, &roster, &mut anomalies) {
                accumulator.lineup_changed(event, &state);
            }
        }
    }

    let last = ordered.last();
    if free_throws.in_progress() {
        let subs = free_throws.drain();
        if !subs.is_empty() {
            anomalies.push(Anomaly::FreeThrowSequenceOpen {
                pending_substitutions: subs.len(),
            });
            // nothing follows, so the terminal lineup never opens an interval
            state.apply_batch(&subs, &roster, &mut anomalies);
        }
    }

    let intervals = accumulator.finish(last);
    let anomalies = anomalies.into_items();
    if anomalies.is_empty() {
        info!(game_id = %roster.game_id, intervals = intervals.len(), "reconstructed game");
    } else {
        warn!(
            game_id = %roster.game_id,
            intervals = intervals.len(),
            anomalies = anomalies.len(),
            "reconstructed game with data anomalies"
        );
    }

    Ok(GameReconstruction {
        roster,
        intervals,
        timeline,
        anomalies,
    })
}
