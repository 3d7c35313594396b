use log::{LevelFilter, warn};
use scores_api::client::{NBA_SCOREBOARD_URL, NHL_SCORE_URL, ScoresApi};
use std::time::Duration;

pub const DEFAULT_REFRESH_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub nhl_url: String,
    pub nba_url: String,
    pub refresh_interval: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            nhl_url: NHL_SCORE_URL.to_string(),
            nba_url: NBA_SCOREBOARD_URL.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from a variable lookup; unset or invalid values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = var("COUCHSCORE_NHL_URL") {
            settings.nhl_url = url;
        }
        if let Some(url) = var("COUCHSCORE_NBA_URL") {
            settings.nba_url = url;
        }
        if let Some(raw) = var("COUCHSCORE_REFRESH_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs >= 1 => settings.refresh_interval = Duration::from_secs(secs),
                _ => warn!("ignoring COUCHSCORE_REFRESH_SECS={raw}; expected a whole number >= 1"),
            }
        }
        if let Some(raw) = var("COUCHSCORE_LOG") {
            match raw.parse::<LevelFilter>() {
                Ok(level) => settings.log_level = Some(level),
                Err(_) => warn!("ignoring COUCHSCORE_LOG={raw}; expected error, warn, info, debug, trace or off"),
            }
        }
        settings
    }

    pub fn log_level_or(&self, default: LevelFilter) -> LevelFilter {
        self.log_level.unwrap_or(default)
    }

    pub fn api(&self) -> ScoresApi {
        ScoresApi::with_urls(self.nhl_url.clone(), self.nba_url.clone())
    }
}
