use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::AppError;
use crate::model::payload::{BoxScorePayload, PlayByPlayPayload};

pub const LIVE_DATA_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";

#[must_use]
pub fn box_score_url(base_url: &str, game_id: &str) -> String {
    format!("{base_url}/boxscore/boxscore_{game_id}.json")
}

#[must_use]
pub fn play_by_play_url(base_url: &str, game_id: &str) -> String {
    format!("{base_url}/playbyplay/playbyplay_{game_id}.json")
}

/// Seconds to wait before retrying a 429, from `Retry-After` when it holds a
/// plain number of seconds.
#[must_use]
pub fn retry_after(headers: &HeaderMap, fallback: Duration) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(fallback, Duration::from_secs)
}

/// Live-data CDN client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct NbaClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    retry_wait: Duration,
}

impl NbaClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(max_retries: u32, retry_wait: Duration) -> Result<Self, AppError> {
        Self::with_base_url(LIVE_DATA_BASE_URL, max_retries, retry_wait)
    }

    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn with_base_url(
        base_url: &str,
        max_retries: u32,
        retry_wait: Duration,
    ) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries,
            retry_wait,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails or the body is not a box score
    pub async fn fetch_box_score(&self, game_id: &str) -> Result<BoxScorePayload, AppError> {
        self.get_json(&box_score_url(&self.base_url, game_id)).await
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails or the body is not a play-by-play
    pub async fn fetch_play_by_play(&self, game_id: &str) -> Result<PlayByPlayPayload, AppError> {
        self.get_json(&play_by_play_url(&self.base_url, game_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let mut attempt = 0;
        loop {
            let resp = self.client.get(url).send().await?;
            if resp.status() == StatusCode::TOO_MANY_REQUESTS && attempt < self.max_retries {
                attempt += 1;
                let wait = retry_after(resp.headers(), self.retry_wait);
                warn!(url, attempt, wait_secs = wait.as_secs(), "rate limited, retrying");
                tokio::time::sleep(wait).await;
                continue;
            }
            if resp.status() == StatusCode::NOT_FOUND {
                return Err(AppError::NotFound(url.to_string()));
            }
            let resp = resp.error_for_status()?;
            info!(url, "fetched");
            return Ok(resp.json::<T>().await?);
        }
    }
}
