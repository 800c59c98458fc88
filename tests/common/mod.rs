#![allow(dead_code)]

use rusty_hoops::controller::reconstruct::{GameReconstruction, reconstruct_game};
use rusty_hoops::error::AppError;
use rusty_hoops::model::{
    ActionKind, AnomalyLog, GameClock, GameEvent, PeriodRules, Player, PlayerId, RecordedScore,
    Roster, Score, TeamId, TeamInfo, TeamSide,
};

pub const GAME_ID: &str = "0022400076";
pub const HOME_TEAM: i64 = 1_610_612_747;
pub const AWAY_TEAM: i64 = 1_610_612_744;

/// Home players are 1..=8, away players 11..=18; the first five of each start.
pub fn roster() -> Roster {
    let mut players = Vec::new();
    for (team, side, first) in [(HOME_TEAM, TeamSide::Home, 1), (AWAY_TEAM, TeamSide::Away, 11)] {
        for i in 0..8 {
            players.push(Player {
                id: PlayerId(first + i),
                name: format!("{side} player {}", first + i),
                team_id: TeamId(team),
                side,
                starter: i < 5,
            });
        }
    }
    let home = TeamInfo {
        team_id: TeamId(HOME_TEAM),
        tricode: "LAL".to_string(),
        starters: (1..=5).map(PlayerId).collect(),
    };
    let away = TeamInfo {
        team_id: TeamId(AWAY_TEAM),
        tricode: "GSW".to_string(),
        starters: (11..=15).map(PlayerId).collect(),
    };
    Roster::new(GAME_ID, home, away, players)
}

pub fn clock(minutes: u32, seconds: u32) -> String {
    format!("PT{minutes:02}M{seconds:02}.00S")
}

pub fn event(
    action_number: i64,
    period: u32,
    raw_clock: &str,
    action_type: &str,
    sub_type: Option<&str>,
    person: Option<i64>,
    score: (i32, i32),
) -> GameEvent {
    let person_id = person.map(PlayerId);
    let team_id = person.map(|p| TeamId(if p < 10 { HOME_TEAM } else { AWAY_TEAM }));
    GameEvent {
        action_number,
        period,
        clock: GameClock::parse(raw_clock).unwrap_or_default(),
        clock_raw: raw_clock.to_string(),
        time_actual: None,
        kind: ActionKind::from_action_type(action_type),
        sub_type: sub_type.map(str::to_string),
        person_id,
        team_id,
        recorded_score: RecordedScore::new(Some(score.0), Some(score.1)),
        score: Score::new(score.0, score.1),
        description: None,
    }
}

pub fn shot(
    action_number: i64,
    period: u32,
    mm: u32,
    ss: u32,
    person: i64,
    score: (i32, i32),
) -> GameEvent {
    event(action_number, period, &clock(mm, ss), "2pt", Some("jumpshot"), Some(person), score)
}

pub fn other(
    action_number: i64,
    period: u32,
    mm: u32,
    ss: u32,
    action_type: &str,
    score: (i32, i32),
) -> GameEvent {
    event(action_number, period, &clock(mm, ss), action_type, None, None, score)
}

pub fn sub(
    action_number: i64,
    period: u32,
    mm: u32,
    ss: u32,
    person: i64,
    direction: &str,
    score: (i32, i32),
) -> GameEvent {
    event(
        action_number,
        period,
        &clock(mm, ss),
        "substitution",
        Some(direction),
        Some(person),
        score,
    )
}

pub fn free_throw(
    action_number: i64,
    period: u32,
    mm: u32,
    ss: u32,
    marker: Option<&str>,
    person: i64,
    score: (i32, i32),
) -> GameEvent {
    event(action_number, period, &clock(mm, ss), "freethrow", marker, Some(person), score)
}

/// Ten events, one clean substitution pair (home 1 out, 6 in) at Q1 10:30.
pub fn ten_event_game() -> Vec<GameEvent> {
    vec![
        other(1, 1, 12, 0, "jumpball", (0, 0)),
        shot(2, 1, 11, 40, 1, (2, 0)),
        shot(3, 1, 11, 20, 11, (2, 2)),
        shot(4, 1, 11, 0, 2, (4, 2)),
        sub(5, 1, 10, 30, 1, "out", (4, 2)),
        sub(6, 1, 10, 30, 6, "in", (4, 2)),
        shot(7, 1, 10, 0, 12, (4, 4)),
        shot(8, 1, 9, 30, 6, (6, 4)),
        shot(9, 1, 9, 0, 13, (6, 6)),
        shot(10, 1, 8, 30, 3, (8, 6)),
    ]
}

/// NBA rules against the shared roster.
pub fn rebuild(events: Vec<GameEvent>) -> Result<GameReconstruction, AppError> {
    reconstruct_game(roster(), events, PeriodRules::nba(), AnomalyLog::new(GAME_ID))
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}
