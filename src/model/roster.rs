use ahash::AHashMap;
use serde::Serialize;

use crate::model::{PlayerId, TeamId, TeamSide};

pub const UNKNOWN_PLAYER: &str = "Unknown Player";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub side: TeamSide,
    pub starter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamInfo {
    pub team_id: TeamId,
    pub tricode: String,
    pub starters: Vec<PlayerId>,
}

/// Static per-game lookup built from the box score.
#[derive(Debug, Clone)]
pub struct Roster {
    pub game_id: String,
    pub home: TeamInfo,
    pub away: TeamInfo,
    players: AHashMap<PlayerId, Player>,
}

impl Roster {
    #[must_use]
    pub fn new(game_id: &str, home: TeamInfo, away: TeamInfo, players: Vec<Player>) -> Self {
        let players = players.into_iter().map(|p| (p.id, p)).collect();
        Self {
            game_id: game_id.to_string(),
            home,
            away,
            players,
        }
    }

    #[must_use]
    pub fn team(&self, side: TeamSide) -> &TeamInfo {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    #[must_use]
    pub fn side_of_team(&self, team_id: TeamId) -> Option<TeamSide> {
        if team_id == self.home.team_id {
            Some(TeamSide::Home)
        } else if team_id == self.away.team_id {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    #[must_use]
    pub fn side_of_player(&self, id: PlayerId) -> Option<TeamSide> {
        self.players.get(&id).map(|p| p.side)
    }

    #[must_use]
    pub fn display_name(&self, id: PlayerId) -> &str {
        self.players
            .get(&id)
            .map_or(UNKNOWN_PLAYER, |p| p.name.as_str())
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }
}
