use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

mod config;
mod fixtures;
mod football_data;
mod server;

use config::Config;
use fixtures::FixtureService;
use football_data::FootballDataClient;
use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    if !config.credential_configured() {
        warn!("FOOTBALL_DATA_KEY not set — /api/matches will return an error until configured");
    }

    let client = FootballDataClient::new(
        &config.football_data_api_url,
        config.football_data_key.clone(),
    )?;
    let service = FixtureService::new(&config, Arc::new(client));

    let app = server::router(AppState { service });
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Fixtures API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
