use crate::nba::{NbaGame, NbaScoreboardResponse};
use crate::nhl::{NhlGame, NhlScoreResponse};
use log::{debug, warn};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const NHL_SCORE_URL: &str = "https://api-web.nhle.com/v1/score/now";
pub const NBA_SCOREBOARD_URL: &str =
    "https://cdn.nba.com/static/json/liveData/scoreboard/todaysScoreboard_00.json";

/// Client for the public NHL and NBA live-score feeds.
#[derive(Debug, Clone)]
pub struct ScoresApi {
    client: Client,
    timeout: Duration,
    nhl_url: String,
    nba_url: String,
}

impl Default for ScoresApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("couchscore/0.1 (terminal scoreboard)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            nhl_url: NHL_SCORE_URL.to_string(),
            nba_url: NBA_SCOREBOARD_URL.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// One fetch cycle's worth of games. A league whose fetch failed is empty.
#[derive(Debug, Clone, Default)]
pub struct Slate {
    pub nhl: Vec<NhlGame>,
    pub nba: Vec<NbaGame>,
}

impl ScoresApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at alternate feed URLs (mirrors, proxies, test servers).
    pub fn with_urls(nhl_url: impl Into<String>, nba_url: impl Into<String>) -> Self {
        Self {
            nhl_url: nhl_url.into(),
            nba_url: nba_url.into(),
            ..Self::default()
        }
    }

    pub fn nhl_url(&self) -> &str {
        &self.nhl_url
    }

    pub fn nba_url(&self) -> &str {
        &self.nba_url
    }

    pub async fn fetch_nhl_games(&self) -> ApiResult<Vec<NhlGame>> {
        let raw: NhlScoreResponse = self.get(&self.nhl_url).await?;
        Ok(raw.games)
    }

    pub async fn fetch_nba_games(&self) -> ApiResult<Vec<NbaGame>> {
        let raw: NbaScoreboardResponse = self.get(&self.nba_url).await?;
        Ok(raw.scoreboard.games)
    }

    /// Fetch both leagues concurrently. A failure in one league is logged and
    /// leaves that league empty without affecting the other.
    pub async fn fetch_slate(&self) -> Slate {
        let (nhl, nba) = futures_util::join!(self.fetch_nhl_games(), self.fetch_nba_games());
        let nhl = nhl.unwrap_or_else(|e| {
            warn!("NHL schedule unavailable: {e}");
            Vec::new()
        });
        let nba = nba.unwrap_or_else(|e| {
            warn!("NBA scoreboard unavailable: {e}");
            Vec::new()
        });
        debug!("fetched {} NHL and {} NBA games", nhl.len(), nba.len());
        Slate { nhl, nba }
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    debug!("{url} returned {:?}; treating as no games", e.status());
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}
