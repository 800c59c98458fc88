use std::cmp::Ordering;

use crate::model::{Anomaly, AnomalyLog, GameClock, GameEvent, Score};

/// Clock remaining for a raw clock string; unparseable values become zero.
pub fn normalize_clock(raw: &str, action_number: i64, anomalies: &mut AnomalyLog) -> GameClock {
    match GameClock::parse(raw) {
        Some(clock) => clock,
        None => {
            anomalies.push(Anomaly::MalformedClock {
                action_number,
                raw: raw.to_string(),
            });
            GameClock::default()
        }
    }
}

/// Chronological order: period ascending, clock descending. At one timestamp
/// substitutions go after everything else, so points scored at that instant
/// (free throws included) stay with the lineup that was on court.
#[must_use]
pub fn compare_events(a: &GameEvent, b: &GameEvent) -> Ordering {
    a.time()
        .cmp(&b.time())
        .then_with(|| a.kind.is_substitution().cmp(&b.kind.is_substitution()))
        .then_with(|| a.action_number.cmp(&b.action_number))
}

/// Stable sort, so fully tied events keep their input order.
#[must_use]
pub fn order_events(mut events: Vec<GameEvent>) -> Vec<GameEvent> {
    events.sort_by(compare_events);
    events
}

/// Fills each event's `score` from its recorded one. A missing side keeps
/// the value of the previous event in `ordered`; zero before any is seen.
#[must_use]
pub fn carry_scores(mut ordered: Vec<GameEvent>) -> Vec<GameEvent> {
    let mut running = Score::default();
    for event in &mut ordered {
        running = event.recorded_score.carried_from(running);
        event.score = running;
    }
    ordered
}
