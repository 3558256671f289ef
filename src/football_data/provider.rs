use async_trait::async_trait;

use super::models::{RawFixture, UpstreamError};
use crate::fixtures::DateWindow;

/// Trait for the upstream fixtures source. The HTTP client implements it;
/// tests substitute mocks.
#[async_trait]
pub trait FixtureProvider: Send + Sync {
    /// Fetch all SCHEDULED fixtures within the window, in provider order.
    async fn fetch_scheduled(&self, window: &DateWindow) -> Result<Vec<RawFixture>, UpstreamError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
