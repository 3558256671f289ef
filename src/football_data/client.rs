use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::models::{MatchesResponse, RawFixture, UpstreamError};
use super::provider::FixtureProvider;
use crate::fixtures::DateWindow;

/// Client for the Football-Data.org v4 API.
/// Docs: <https://www.football-data.org/documentation/quickstart>
pub struct FootballDataClient {
    http: Client,
    api_key: Option<String>,
    /// Base URL for overriding in tests
    base_url: String,
}

impl FootballDataClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(FootballDataClient {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FixtureProvider for FootballDataClient {
    fn name(&self) -> &str {
        "Football-Data.org"
    }

    async fn fetch_scheduled(&self, window: &DateWindow) -> Result<Vec<RawFixture>, UpstreamError> {
        let url = format!("{}/matches", self.base_url);
        debug!("Fetching scheduled matches from {} ({})", url, window);

        let mut req = self.http.get(&url).query(&[
            ("dateFrom", window.from.to_string()),
            ("dateTo", window.to.to_string()),
            ("status", "SCHEDULED".to_string()),
        ]);
        if let Some(key) = self.api_key.as_deref() {
            req = req.header("X-Auth-Token", key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::status(status.as_u16(), &body));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;
        let parsed: MatchesResponse = serde_json::from_str(&body).map_err(|e| {
            UpstreamError::malformed(status.as_u16(), format!("Malformed matches response: {}", e))
        })?;

        // Diagnostics only; off at the default info filter
        if let Some(first) = parsed.matches.first() {
            debug!(?first, "First match record from Football-Data.org");
        }

        Ok(parsed.matches)
    }
}
