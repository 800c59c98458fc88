//! Wire shapes of the NBA live-data CDN payloads. Only the fields the
//! reconstruction reads are modelled; everything else is ignored.

use serde::Deserialize;
use serde_aux::field_attributes::{
    deserialize_bool_from_anything, deserialize_option_number_from_string,
};

#[derive(Debug, Clone, Deserialize)]
pub struct BoxScorePayload {
    pub game: Option<BoxScoreGame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreGame {
    #[serde(default)]
    pub game_id: Option<String>,
    pub home_team: Option<TeamPayload>,
    pub away_team: Option<TeamPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
    pub team_id: i64,
    #[serde(default)]
    pub team_tricode: String,
    #[serde(default)]
    pub players: Vec<PlayerPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    pub person_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_from_anything")]
    pub starter: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayByPlayPayload {
    pub game: Option<PlayByPlayGame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayGame {
    #[serde(default)]
    pub game_id: Option<String>,
    pub actions: Option<Vec<ActionPayload>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload {
    #[serde(default)]
    pub action_number: i64,
    pub period: u32,
    #[serde(default)]
    pub clock: String,
    #[serde(default)]
    pub time_actual: Option<String>,
    pub action_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub person_id: Option<i64>,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub score_home: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub score_away: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}
