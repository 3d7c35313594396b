pub mod client;
pub mod nba;
pub mod nhl;
pub mod ranking;
pub mod status;
pub mod time;

use serde::Serialize;
use std::fmt;

pub use crate::nba::NbaGame;
pub use crate::nhl::NhlGame;
pub use crate::status::{LiveTimer, StatusClass, StatusDisplay};

/// Feeds send `null` for fields they have no value for yet; read that the
/// same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Domain types — one sum type over both upstream schemas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Sport {
    #[serde(rename = "NHL")]
    Nhl,
    #[serde(rename = "NBA")]
    Nba,
}

impl Sport {
    pub fn label(&self) -> &'static str {
        match self {
            Sport::Nhl => "NHL",
            Sport::Nba => "NBA",
        }
    }

    /// Periods played in regulation; anything past this is overtime.
    pub fn regulation_periods(&self) -> u8 {
        match self {
            Sport::Nhl => 3,
            Sport::Nba => 4,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A game from either league. The variant is fixed at ingestion, so the
/// sport of a record is never inferred from its fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Game {
    Nhl(NhlGame),
    Nba(NbaGame),
}

/// Stable identity of a game within one fetch: sport plus upstream id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameKey {
    pub sport: Sport,
    pub id: String,
}

/// Presentation fields for one side of a matchup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamLine {
    pub abbrev: String,
    pub score: Option<u16>,
    pub logo: Option<String>,
}

impl GameKey {
    /// Feeds default a missing id to `0` or an empty string.
    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty() || self.id == "0"
    }
}

impl Game {
    pub fn sport(&self) -> Sport {
        match self {
            Game::Nhl(_) => Sport::Nhl,
            Game::Nba(_) => Sport::Nba,
        }
    }

    pub fn key(&self) -> GameKey {
        let id = match self {
            Game::Nhl(g) => g.id.to_string(),
            Game::Nba(g) => g.game_id.clone(),
        };
        GameKey { sport: self.sport(), id }
    }

    pub fn away(&self) -> TeamLine {
        match self {
            Game::Nhl(g) => TeamLine {
                abbrev: g.away_team.abbrev.clone(),
                score: g.away_team.score,
                logo: g.away_team.logo.clone(),
            },
            Game::Nba(g) => TeamLine {
                abbrev: g.away_team.team_tricode.clone(),
                score: g.away_team.score,
                logo: Some(g.away_team.logo_url()),
            },
        }
    }

    pub fn home(&self) -> TeamLine {
        match self {
            Game::Nhl(g) => TeamLine {
                abbrev: g.home_team.abbrev.clone(),
                score: g.home_team.score,
                logo: g.home_team.logo.clone(),
            },
            Game::Nba(g) => TeamLine {
                abbrev: g.home_team.team_tricode.clone(),
                score: g.home_team.score,
                logo: Some(g.home_team.logo_url()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nba::NbaTeam;
    use crate::nhl::NhlTeam;

    #[test]
    fn missing_ids_are_anonymous() {
        assert!(Game::Nhl(NhlGame::default()).key().is_anonymous());
        assert!(Game::Nba(NbaGame::default()).key().is_anonymous());
        let nhl = Game::Nhl(NhlGame { id: 2024020417, ..Default::default() });
        assert!(!nhl.key().is_anonymous());
    }

    #[test]
    fn keys_differ_across_sports_with_same_id() {
        let nhl = Game::Nhl(NhlGame { id: 42, ..Default::default() });
        let nba = Game::Nba(NbaGame { game_id: "42".into(), ..Default::default() });
        assert_eq!(nhl.key().id, nba.key().id);
        assert_ne!(nhl.key(), nba.key());
    }

    #[test]
    fn nba_team_line_builds_logo_from_team_id() {
        let game = Game::Nba(NbaGame {
            away_team: NbaTeam { team_id: 10, team_tricode: "LAL".into(), score: Some(99) },
            ..Default::default()
        });
        let away = game.away();
        assert_eq!(away.abbrev, "LAL");
        assert_eq!(away.score, Some(99));
        assert_eq!(away.logo.as_deref(), Some("https://cdn.nba.com/logos/nba/10/global/L/logo.svg"));
    }

    #[test]
    fn nhl_team_line_passes_logo_through() {
        let game = Game::Nhl(NhlGame {
            home_team: NhlTeam { abbrev: "EDM".into(), score: None, logo: None },
            ..Default::default()
        });
        assert_eq!(game.home(), TeamLine { abbrev: "EDM".into(), score: None, logo: None });
    }
}
