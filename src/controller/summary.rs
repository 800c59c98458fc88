use ahash::AHashMap;
use serde::Serialize;

use crate::model::{CENTIS_PER_SECOND, PlayerId, Roster, ScoringInterval, TeamSide};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub game_id: String,
    pub player_id: PlayerId,
    pub player_name: String,
    pub side: TeamSide,
    pub seconds_on_court: f64,
    pub intervals: usize,
    pub points_for: i32,
    pub points_against: i32,
    pub plus_minus: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupSummary {
    pub game_id: String,
    pub side: TeamSide,
    pub players: String,
    pub player_ids: Vec<PlayerId>,
    pub seconds_together: f64,
    pub intervals: usize,
    pub points_for: i32,
    pub points_against: i32,
    pub plus_minus: i32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    centis: u32,
    intervals: usize,
    points_for: i32,
    points_against: i32,
}

impl Tally {
    fn add(&mut self, interval: &ScoringInterval, side: TeamSide) {
        let other = match side {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        };
        self.centis += interval.duration_centis();
        self.intervals += 1;
        self.points_for += interval.points(side);
        self.points_against += interval.points(other);
    }

    fn seconds(&self) -> f64 {
        f64::from(self.centis) / f64::from(CENTIS_PER_SECOND)
    }
}

/// Minutes and on-court plus/minus for every player who appears in a lineup,
/// from that player's team's perspective.
#[must_use]
pub fn player_summaries(intervals: &[ScoringInterval], roster: &Roster) -> Vec<PlayerSummary> {
    let mut tallies: AHashMap<(TeamSide, PlayerId), Tally> = AHashMap::new();
    for interval in intervals {
        for side in TeamSide::BOTH {
            for player in interval.lineup(side).players() {
                tallies.entry((side, player)).or_default().add(interval, side);
            }
        }
    }

    let mut summaries: Vec<PlayerSummary> = tallies
        .into_iter()
        .map(|((side, player), tally)| PlayerSummary {
            game_id: roster.game_id.clone(),
            player_id: player,
            player_name: roster.display_name(player).to_string(),
            side,
            seconds_on_court: tally.seconds(),
            intervals: tally.intervals,
            points_for: tally.points_for,
            points_against: tally.points_against,
            plus_minus: tally.points_for - tally.points_against,
        })
        .collect();
    summaries.sort_by(|a, b| {
        a.side
            .cmp(&b.side)
            .then_with(|| b.seconds_on_court.total_cmp(&a.seconds_on_court))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    summaries
}

/// Totals per distinct five-player unit.
#[must_use]
pub fn lineup_summaries(intervals: &[ScoringInterval], roster: &Roster) -> Vec<LineupSummary> {
    let mut tallies: AHashMap<(TeamSide, Vec<PlayerId>), Tally> = AHashMap::new();
    for interval in intervals {
        for side in TeamSide::BOTH {
            tallies
                .entry((side, interval.lineup(side).signature()))
                .or_default()
                .add(interval, side);
        }
    }

    let mut summaries: Vec<LineupSummary> = tallies
        .into_iter()
        .map(|((side, player_ids), tally)| LineupSummary {
            game_id: roster.game_id.clone(),
            side,
            players: player_ids
                .iter()
                .map(|id| roster.display_name(*id))
                .collect::<Vec<_>>()
                .join(" - "),
            player_ids,
            seconds_together: tally.seconds(),
            intervals: tally.intervals,
            points_for: tally.points_for,
            points_against: tally.points_against,
            plus_minus: tally.points_for - tally.points_against,
        })
        .collect();
    summaries.sort_by(|a, b| {
        a.side
            .cmp(&b.side)
            .then_with(|| b.seconds_together.total_cmp(&a.seconds_together))
            .then_with(|| a.player_ids.cmp(&b.player_ids))
    });
    summaries
}
