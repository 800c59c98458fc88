use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use crate::model::{PlayerId, RecordedScore, Score, TeamId};

pub const CENTIS_PER_SECOND: u32 = 100;
pub const CENTIS_PER_MINUTE: u32 = 60 * CENTIS_PER_SECOND;

/// Highest period a feed may report; four quarters plus sixteen overtimes.
pub const MAX_PERIOD: u32 = 20;

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(\d+)M(\d+)(?:\.(\d+))?S$").expect("clock pattern is a valid regex")
});

static FREE_THROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+) of (\d+)").expect("free throw pattern is a valid regex")
});

/// Time left in a period, in hundredths of a second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameClock(pub u32);

impl GameClock {
    /// Parses the CDN's ISO-8601-ish clock, e.g. `PT06M06.00S`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = CLOCK_PATTERN.captures(raw.trim())?;
        let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
        let seconds: u32 = caps.get(2)?.as_str().parse().ok()?;
        let centis = match caps.get(3) {
            Some(frac) => {
                // only hundredths matter; "5" means 50
                let digits: String = frac.as_str().chars().chain("00".chars()).take(2).collect();
                digits.parse::<u32>().ok()?
            }
            None => 0,
        };
        minutes
            .checked_mul(CENTIS_PER_MINUTE)?
            .checked_add(seconds.checked_mul(CENTIS_PER_SECOND)?)?
            .checked_add(centis)
            .map(GameClock)
    }

    #[must_use]
    pub fn centis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn seconds(self) -> f64 {
        f64::from(self.0) / f64::from(CENTIS_PER_SECOND)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / CENTIS_PER_MINUTE;
        let seconds = (self.0 % CENTIS_PER_MINUTE) / CENTIS_PER_SECOND;
        let centis = self.0 % CENTIS_PER_SECOND;
        if centis == 0 {
            write!(f, "{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes:02}:{seconds:02}.{centis:02}")
        }
    }
}

/// Period lengths used to turn a (period, clock) pair into elapsed game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRules {
    pub regulation_periods: u32,
    pub regulation_length: GameClock,
    pub overtime_length: GameClock,
}

impl PeriodRules {
    #[must_use]
    pub fn nba() -> Self {
        Self {
            regulation_periods: 4,
            regulation_length: GameClock(12 * CENTIS_PER_MINUTE),
            overtime_length: GameClock(5 * CENTIS_PER_MINUTE),
        }
    }

    #[must_use]
    pub fn wnba() -> Self {
        Self {
            regulation_periods: 4,
            regulation_length: GameClock(10 * CENTIS_PER_MINUTE),
            overtime_length: GameClock(5 * CENTIS_PER_MINUTE),
        }
    }

    #[must_use]
    pub fn period_length(&self, period: u32) -> GameClock {
        if period <= self.regulation_periods {
            self.regulation_length
        } else {
            self.overtime_length
        }
    }
}

impl Default for PeriodRules {
    fn default() -> Self {
        Self::nba()
    }
}

/// A point in the game. Orders by period ascending, then clock descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameTime {
    pub period: u32,
    pub clock: GameClock,
}

impl GameTime {
    #[must_use]
    pub fn new(period: u32, clock: GameClock) -> Self {
        Self { period, clock }
    }

    /// Hundredths of a second since tip-off. Saturates at `u32::MAX` for
    /// periods no real game reaches.
    #[must_use]
    pub fn elapsed(&self, rules: &PeriodRules) -> u32 {
        let completed = u64::from(self.period.saturating_sub(1));
        let regulation = completed.min(u64::from(rules.regulation_periods));
        let overtime = completed - regulation;
        let before = regulation * u64::from(rules.regulation_length.centis())
            + overtime * u64::from(rules.overtime_length.centis());
        let in_period = rules
            .period_length(self.period)
            .centis()
            .saturating_sub(self.clock.centis());
        u32::try_from(before + u64::from(in_period)).unwrap_or(u32::MAX)
    }
}

impl Ord for GameTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.period
            .cmp(&other.period)
            .then_with(|| other.clock.cmp(&self.clock))
    }
}

impl PartialOrd for GameTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.period, self.clock)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Shot2,
    Shot3,
    FreeThrow,
    Substitution,
    Other(String),
}

impl ActionKind {
    #[must_use]
    pub fn from_action_type(action_type: &str) -> Self {
        match action_type {
            "2pt" => ActionKind::Shot2,
            "3pt" => ActionKind::Shot3,
            "freethrow" => ActionKind::FreeThrow,
            "substitution" => ActionKind::Substitution,
            other => ActionKind::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Shot2 => "2pt",
            ActionKind::Shot3 => "3pt",
            ActionKind::FreeThrow => "freethrow",
            ActionKind::Substitution => "substitution",
            ActionKind::Other(s) => s,
        }
    }

    #[must_use]
    pub fn is_substitution(&self) -> bool {
        matches!(self, ActionKind::Substitution)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionDirection {
    In,
    Out,
}

impl SubstitutionDirection {
    #[must_use]
    pub fn parse(sub_type: Option<&str>) -> Option<Self> {
        match sub_type.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("in") => Some(SubstitutionDirection::In),
            Some(s) if s.eq_ignore_ascii_case("out") => Some(SubstitutionDirection::Out),
            _ => None,
        }
    }
}

/// One play-by-play action.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub action_number: i64,
    pub period: u32,
    pub clock: GameClock,
    pub clock_raw: String,
    pub time_actual: Option<String>,
    pub kind: ActionKind,
    pub sub_type: Option<String>,
    pub person_id: Option<PlayerId>,
    pub team_id: Option<TeamId>,
    /// Score fields as they appeared on the action.
    pub recorded_score: RecordedScore,
    /// Recorded score with gaps filled from the previous action in game order.
    pub score: Score,
    pub description: Option<String>,
}

impl GameEvent {
    #[must_use]
    pub fn time(&self) -> GameTime {
        GameTime::new(self.period, self.clock)
    }

    /// `(shot, of)` from a free-throw subtype like `"2 of 3"`.
    #[must_use]
    pub fn free_throw_marker(&self) -> Option<(u32, u32)> {
        if self.kind != ActionKind::FreeThrow {
            return None;
        }
        let caps = FREE_THROW_PATTERN.captures(self.sub_type.as_deref()?.trim())?;
        let shot = caps.get(1)?.as_str().parse().ok()?;
        let total = caps.get(2)?.as_str().parse().ok()?;
        Some((shot, total))
    }
}
