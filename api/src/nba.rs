/// NBA live-data CDN wire types.
/// Endpoint: https://cdn.nba.com/static/json/liveData/scoreboard/todaysScoreboard_00.json
use serde::Deserialize;

const NBA_LOGO_CDN: &str = "https://cdn.nba.com/logos/nba";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NbaScoreboardResponse {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub scoreboard: NbaScoreboard,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NbaScoreboard {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub games: Vec<NbaGame>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NbaGame {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub game_id: String,
    /// 1 = scheduled, 2 = in progress, 3 = final.
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub game_status: i64,
    /// Free text, e.g. "Q4 10:13", "Halftime", "7:30 pm ET".
    pub game_status_text: Option<String>,
    #[serde(rename = "gameTimeUTC")]
    pub game_time_utc: Option<String>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub period: u8,
    /// ISO-8601 duration, e.g. "PT10M13.00S". Empty before tip-off.
    pub game_clock: Option<String>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub away_team: NbaTeam,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub home_team: NbaTeam,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NbaTeam {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub team_id: i64,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub team_tricode: String,
    pub score: Option<u16>,
}

impl NbaTeam {
    /// The scoreboard feed carries no logo, so build the CDN path from the team id.
    pub fn logo_url(&self) -> String {
        format!("{NBA_LOGO_CDN}/{}/global/L/logo.svg", self.team_id)
    }
}
