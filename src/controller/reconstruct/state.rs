use crate::model::{
    Anomaly, AnomalyLog, GameEvent, LINEUP_SIZE, Lineup, PlayerId, Roster, SubOutcome,
    SubstitutionDirection, TeamSide,
};

/// Both teams' lineups. Starts from the flagged starters and changes only
/// through substitution batches.
#[derive(Debug, Clone)]
pub struct LineupState {
    home: Lineup,
    away: Lineup,
}

impl LineupState {
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            home: Lineup::from_players(&roster.home.starters),
            away: Lineup::from_players(&roster.away.starters),
        }
    }

    #[must_use]
    pub fn lineup(&self, side: TeamSide) -> &Lineup {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    fn lineup_mut(&mut self, side: TeamSide) -> &mut Lineup {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    /// Combined (home, away) signature; a change means a new interval.
    #[must_use]
    pub fn signature(&self) -> (Vec<PlayerId>, Vec<PlayerId>) {
        (self.home.signature(), self.away.signature())
    }

    /// Applies substitutions that take effect at the same moment. Returns
    /// whether either lineup changed.
    ///
    /// An `in` that finds the lineup full is retried once after the rest of
    /// the batch, so an `in` recorded ahead of its `out` still lands.
    pub fn apply_batch(
        &mut self,
        batch: &[GameEvent],
        roster: &Roster,
        anomalies: &mut AnomalyLog,
    ) -> bool {
        if batch.is_empty() {
            return false;
        }
        let before = self.signature();
        let mut deferred: Vec<(i64, TeamSide, PlayerId)> = Vec::new();
        let mut touched: Vec<TeamSide> = Vec::new();

        for sub in batch {
            let Some((side, player, direction)) = resolve(sub, roster, anomalies) else {
                continue;
            };
            if !touched.contains(&side) {
                touched.push(side);
            }
            let action_number = sub.action_number;
            match direction {
                SubstitutionDirection::Out => {
                    if self.lineup_mut(side).remove(player) == SubOutcome::NotOnCourt {
                        anomalies.push(Anomaly::SubOutNotOnCourt {
                            action_number,
                            side,
                            player,
                        });
                    }
                }
                SubstitutionDirection::In => match self.lineup_mut(side).add(player) {
                    SubOutcome::Full => deferred.push((action_number, side, player)),
                    SubOutcome::AlreadyOnCourt => {
                        anomalies.push(Anomaly::SubInAlreadyOnCourt {
                            action_number,
                            side,
                            player,
                        });
                    }
                    SubOutcome::Applied | SubOutcome::NotOnCourt => {}
                },
            }
        }

        for (action_number, side, player) in deferred {
            match self.lineup_mut(side).add(player) {
                SubOutcome::Full => anomalies.push(Anomaly::SubInLineupFull {
                    action_number,
                    side,
                    player,
                }),
                SubOutcome::AlreadyOnCourt => anomalies.push(Anomaly::SubInAlreadyOnCourt {
                    action_number,
                    side,
                    player,
                }),
                SubOutcome::Applied | SubOutcome::NotOnCourt => {}
            }
        }

        let last_action = batch.last().map_or(0, |e| e.action_number);
        for side in touched {
            let size = self.lineup(side).len();
            if size != LINEUP_SIZE {
                anomalies.push(Anomaly::LineupSize {
                    action_number: last_action,
                    side,
                    size,
                });
            }
        }

        self.signature() != before
    }
}

/// Team side, player and direction of a substitution, or `None` (logged) if
/// any of them cannot be determined.
fn resolve(
    sub: &GameEvent,
    roster: &Roster,
    anomalies: &mut AnomalyLog,
) -> Option<(TeamSide, PlayerId, SubstitutionDirection)> {
    let Some(direction) = SubstitutionDirection::parse(sub.sub_type.as_deref()) else {
        anomalies.push(Anomaly::UnknownSubstitution {
            action_number: sub.action_number,
            sub_type: sub.sub_type.clone(),
        });
        return None;
    };
    let side = sub.person_id.and_then(|id| {
        roster
            .side_of_player(id)
            .or_else(|| sub.team_id.and_then(|t| roster.side_of_team(t)))
    });
    match (sub.person_id, side) {
        (Some(player), Some(side)) => Some((side, player, direction)),
        (player, _) => {
            anomalies.push(Anomaly::UnknownPlayer {
                action_number: sub.action_number,
                player,
            });
            None
        }
    }
}
