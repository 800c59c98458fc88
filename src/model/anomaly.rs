use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::model::{PlayerId, TeamSide};

/// Data-quality problems that are tolerated: logged, recorded, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    StarterCount {
        side: TeamSide,
        found: usize,
    },
    MalformedClock {
        action_number: i64,
        raw: String,
    },
    SubOutNotOnCourt {
        action_number: i64,
        side: TeamSide,
        player: PlayerId,
    },
    SubInAlreadyOnCourt {
        action_number: i64,
        side: TeamSide,
        player: PlayerId,
    },
    SubInLineupFull {
        action_number: i64,
        side: TeamSide,
        player: PlayerId,
    },
    UnknownPlayer {
        action_number: i64,
        player: Option<PlayerId>,
    },
    UnknownSubstitution {
        action_number: i64,
        sub_type: Option<String>,
    },
    LineupSize {
        action_number: i64,
        side: TeamSide,
        size: usize,
    },
    FreeThrowWithoutMarker {
        action_number: i64,
    },
    FreeThrowSequenceOpen {
        pending_substitutions: usize,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::StarterCount { side, found } => {
                write!(f, "{side} team has {found} flagged starters, expected 5")
            }
            Anomaly::MalformedClock { action_number, raw } => {
                write!(f, "action {action_number}: unparseable clock {raw:?}, using 0")
            }
            Anomaly::SubOutNotOnCourt {
                action_number,
                side,
                player,
            } => write!(
                f,
                "action {action_number}: {side} player {player} subbed out but was not on court"
            ),
            Anomaly::SubInAlreadyOnCourt {
                action_number,
                side,
                player,
            } => write!(
                f,
                "action {action_number}: {side} player {player} subbed in but was already on court"
            ),
            Anomaly::SubInLineupFull {
                action_number,
                side,
                player,
            } => write!(
                f,
                "action {action_number}: {side} player {player} subbed in but the lineup is full"
            ),
            Anomaly::UnknownPlayer {
                action_number,
                player,
            } => match player {
                Some(p) => write!(
                    f,
                    "action {action_number}: player {p} belongs to neither team"
                ),
                None => write!(f, "action {action_number}: substitution without a player"),
            },
            Anomaly::UnknownSubstitution {
                action_number,
                sub_type,
            } => write!(
                f,
                "action {action_number}: substitution subtype {sub_type:?} is neither in nor out"
            ),
            Anomaly::LineupSize {
                action_number,
                side,
                size,
            } => write!(
                f,
                "action {action_number}: {side} lineup has {size} players after substitutions"
            ),
            Anomaly::FreeThrowWithoutMarker { action_number } => write!(
                f,
                "action {action_number}: free throw without subtype treated as end of sequence"
            ),
            Anomaly::FreeThrowSequenceOpen {
                pending_substitutions,
            } => write!(
                f,
                "game ended during a free-throw sequence; applied {pending_substitutions} pending substitutions"
            ),
        }
    }
}

/// Per-game anomaly sink that also emits a `warn!` for each entry.
#[derive(Debug, Clone, Default)]
pub struct AnomalyLog {
    game_id: String,
    items: Vec<Anomaly>,
}

impl AnomalyLog {
    #[must_use]
    pub fn new(game_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, anomaly: Anomaly) {
        warn!(game_id = %self.game_id, "{anomaly}");
        self.items.push(anomaly);
    }

    #[must_use]
    pub fn items(&self) -> &[Anomaly] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Anomaly> {
        self.items
    }
}
