use crate::model::{EventLineup, GameEvent, IntervalRow, Lineup, Roster, ScoringInterval};

fn slot_names(lineup: &Lineup, roster: &Roster) -> [String; 5] {
    let slots = lineup.slots();
    std::array::from_fn(|i| {
        slots[i]
            .map(|id| roster.display_name(id).to_string())
            .unwrap_or_default()
    })
}

/// One row per interval, each on-court player in a fixed positional column.
#[must_use]
pub fn project_intervals(intervals: &[ScoringInterval], roster: &Roster) -> Vec<IntervalRow> {
    intervals
        .iter()
        .map(|interval| {
            let [h1, h2, h3, h4, h5] = slot_names(&interval.home_lineup, roster);
            let [a1, a2, a3, a4, a5] = slot_names(&interval.away_lineup, roster);
            IntervalRow {
                game_id: roster.game_id.clone(),
                interval: interval.index,
                start_period: interval.start.period,
                start_clock: interval.start.clock.to_string(),
                end_period: interval.end.period,
                end_clock: interval.end.clock.to_string(),
                duration_seconds: interval.duration_seconds(),
                home_player_1: h1,
                home_player_2: h2,
                home_player_3: h3,
                home_player_4: h4,
                home_player_5: h5,
                away_player_1: a1,
                away_player_2: a2,
                away_player_3: a3,
                away_player_4: a4,
                away_player_5: a5,
                home_points: interval.home_points,
                away_points: interval.away_points,
                plus_minus: interval.plus_minus,
            }
        })
        .collect()
}

#[must_use]
pub fn event_lineup(event: &GameEvent, interval: usize) -> EventLineup {
    EventLineup {
        action_number: event.action_number,
        period: event.period,
        clock: event.clock.to_string(),
        clock_raw: event.clock_raw.clone(),
        action_type: event.kind.to_string(),
        sub_type: event.sub_type.clone(),
        description: event.description.clone(),
        score_home: event.score.home,
        score_away: event.score.away,
        interval,
    }
}
