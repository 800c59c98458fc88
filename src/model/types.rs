use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which bench a team sits on. Plus/minus is always home minus away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::Home, TeamSide::Away];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running score as recorded on a play-by-play action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i32,
    pub away: i32,
}

impl Score {
    #[must_use]
    pub fn new(home: i32, away: i32) -> Self {
        Self { home, away }
    }

    #[must_use]
    pub fn for_side(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }
}

/// Score fields of one action; the feed omits them on most non-scoring plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedScore {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

impl RecordedScore {
    #[must_use]
    pub fn new(home: Option<i32>, away: Option<i32>) -> Self {
        Self { home, away }
    }

    /// This score, with a missing side taken from `previous`.
    #[must_use]
    pub fn carried_from(&self, previous: Score) -> Score {
        Score {
            home: self.home.unwrap_or(previous.home),
            away: self.away.unwrap_or(previous.away),
        }
    }
}

impl From<Score> for RecordedScore {
    fn from(score: Score) -> Self {
        Self::new(Some(score.home), Some(score.away))
    }
}
