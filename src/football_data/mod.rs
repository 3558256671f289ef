pub mod client;
pub mod models;
pub mod provider;

pub use client::FootballDataClient;
pub use models::{RawFixture, UpstreamError};
pub use provider::FixtureProvider;
