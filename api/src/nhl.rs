/// NHL web API wire types.
/// Endpoint: https://api-web.nhle.com/v1/score/now
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NhlScoreResponse {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub games: Vec<NhlGame>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NhlGame {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub id: i64,
    /// FUT, PRE, LIVE, CRIT, FINAL, OFF. Anything else is echoed verbatim.
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub game_state: String,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    pub period_descriptor: Option<NhlPeriodDescriptor>,
    pub clock: Option<NhlClock>,
    pub game_outcome: Option<NhlGameOutcome>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub away_team: NhlTeam,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub home_team: NhlTeam,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NhlPeriodDescriptor {
    #[serde(default)]
    pub number: Option<u8>,
    pub period_type: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NhlClock {
    /// Signed on the wire; clamped to zero before display.
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub seconds_remaining: i64,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub in_intermission: bool,
    pub running: Option<bool>,
}

impl NhlClock {
    pub fn seconds(&self) -> u32 {
        self.seconds_remaining.clamp(0, i64::from(u32::MAX)) as u32
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NhlGameOutcome {
    /// OT, SO or REG.
    pub last_period_type: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct NhlTeam {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub abbrev: String,
    pub score: Option<u16>,
    pub logo: Option<String>,
}
