use crate::controller::reconstruct::normalize_clock;
use crate::error::AppError;
use crate::model::payload::{
    ActionPayload, BoxScorePayload, PlayByPlayPayload, PlayerPayload, TeamPayload,
};
use crate::model::{
    ActionKind, Anomaly, AnomalyLog, GameEvent, LINEUP_SIZE, MAX_PERIOD, Player, PlayerId,
    RecordedScore, Roster, Score, TeamId, TeamInfo, TeamSide,
};

fn display_name(player: &PlayerPayload) -> String {
    let full = format!("{} {}", player.first_name.trim(), player.family_name.trim());
    let full = full.trim();
    if full.is_empty() {
        player.name.clone().unwrap_or_else(|| player.person_id.to_string())
    } else {
        full.to_string()
    }
}

fn team_info(
    game_id: &str,
    team: &TeamPayload,
    side: TeamSide,
    anomalies: &mut AnomalyLog,
) -> Result<TeamInfo, AppError> {
    let flagged: Vec<PlayerId> = team
        .players
        .iter()
        .filter(|p| p.starter)
        .map(|p| PlayerId(p.person_id))
        .collect();
    if flagged.len() < LINEUP_SIZE {
        return Err(AppError::malformed(
            game_id,
            format!("{side} team has {} flagged starters", flagged.len()),
        ));
    }
    if flagged.len() > LINEUP_SIZE {
        anomalies.push(Anomaly::StarterCount {
            side,
            found: flagged.len(),
        });
    }
    Ok(TeamInfo {
        team_id: TeamId(team.team_id),
        tricode: team.team_tricode.clone(),
        starters: flagged.into_iter().take(LINEUP_SIZE).collect(),
    })
}

/// Builds the per-game roster: names, team membership and starters.
///
/// # Errors
///
/// Will return `Err` if the `game`, `homeTeam` or `awayTeam` block is missing,
/// or a team flags fewer than five starters.
pub fn roster_from_box_score(
    game_id: &str,
    payload: &BoxScorePayload,
    anomalies: &mut AnomalyLog,
) -> Result<Roster, AppError> {
    let game = payload
        .game
        .as_ref()
        .ok_or_else(|| AppError::malformed(game_id, "box score has no game block"))?;
    let home = game
        .home_team
        .as_ref()
        .ok_or_else(|| AppError::malformed(game_id, "box score has no homeTeam"))?;
    let away = game
        .away_team
        .as_ref()
        .ok_or_else(|| AppError::malformed(game_id, "box score has no awayTeam"))?;

    let home_info = team_info(game_id, home, TeamSide::Home, anomalies)?;
    let away_info = team_info(game_id, away, TeamSide::Away, anomalies)?;

    let players = [(home, TeamSide::Home), (away, TeamSide::Away)]
        .into_iter()
        .flat_map(|(team, side)| {
            team.players.iter().map(move |p| Player {
                id: PlayerId(p.person_id),
                name: display_name(p),
                team_id: TeamId(team.team_id),
                side,
                starter: p.starter,
            })
        })
        .collect();

    Ok(Roster::new(game_id, home_info, away_info, players))
}

fn event_from_action(action: &ActionPayload, anomalies: &mut AnomalyLog) -> GameEvent {
    GameEvent {
        action_number: action.action_number,
        period: action.period,
        clock: normalize_clock(&action.clock, action.action_number, anomalies),
        clock_raw: action.clock.clone(),
        time_actual: action.time_actual.clone(),
        kind: ActionKind::from_action_type(&action.action_type),
        sub_type: action.sub_type.clone().filter(|s| !s.trim().is_empty()),
        person_id: action.person_id.filter(|id| *id != 0).map(PlayerId),
        team_id: action.team_id.filter(|id| *id != 0).map(TeamId),
        recorded_score: RecordedScore::new(action.score_home, action.score_away),
        // filled in game order by `carry_scores`
        score: Score::default(),
        description: action.description.clone(),
    }
}

/// Converts CDN actions to events, in feed order.
///
/// # Errors
///
/// Will return `Err` if the `game` block or its `actions` list is missing, or
/// if an action reports a period outside `1..=MAX_PERIOD`.
pub fn events_from_play_by_play(
    game_id: &str,
    payload: &PlayByPlayPayload,
    anomalies: &mut AnomalyLog,
) -> Result<Vec<GameEvent>, AppError> {
    let actions = payload
        .game
        .as_ref()
        .and_then(|g| g.actions.as_ref())
        .ok_or_else(|| AppError::malformed(game_id, "play-by-play has no actions list"))?;

    if let Some(bad) = actions.iter().find(|a| !(1..=MAX_PERIOD).contains(&a.period)) {
        return Err(AppError::malformed(
            game_id,
            format!("action {} has period {}", bad.action_number, bad.period),
        ));
    }

    Ok(actions
        .iter()
        .map(|a| event_from_action(a, anomalies))
        .collect())
}
