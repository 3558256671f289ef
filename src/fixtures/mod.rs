pub mod models;

pub use models::{DateWindow, Fixture, UNKNOWN_LEAGUE};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::Config;
use crate::football_data::{FixtureProvider, UpstreamError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    /// No API token configured; the provider is never contacted.
    #[error("Football-Data.org API key not configured.")]
    Unconfigured,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Fetches the upcoming window of scheduled fixtures and normalizes them.
/// Stateless between calls; nothing is cached or memoized.
pub struct FixtureService {
    provider: Arc<dyn FixtureProvider>,
    credentialed: bool,
}

impl FixtureService {
    pub fn new(config: &Config, provider: Arc<dyn FixtureProvider>) -> Self {
        FixtureService {
            provider,
            credentialed: config.credential_configured(),
        }
    }

    /// All SCHEDULED fixtures from the date of `now` through ten days out,
    /// in provider order. An empty list is a valid outcome.
    pub async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Fixture>, ServiceError> {
        if !self.credentialed {
            return Err(ServiceError::Unconfigured);
        }

        let window = DateWindow::starting(now);
        let raw = self.provider.fetch_scheduled(&window).await?;
        debug!(
            "Provider '{}' returned {} fixture(s) for {}",
            self.provider.name(),
            raw.len(),
            window
        );

        Ok(raw.into_iter().map(Fixture::from_raw).collect())
    }
}
