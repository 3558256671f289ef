use clap::Parser;

/// Upcoming football fixtures API server
#[derive(Parser, Debug, Clone)]
#[command(name = "matchday-api", version, about)]
pub struct Config {
    /// Football-Data.org API token (X-Auth-Token header)
    #[arg(long, env = "FOOTBALL_DATA_KEY")]
    pub football_data_key: Option<String>,

    /// Football-Data.org API base URL
    #[arg(
        long,
        env = "FOOTBALL_DATA_API_URL",
        default_value = "https://api.football-data.org/v4"
    )]
    pub football_data_api_url: String,

    /// Port for the HTTP listener
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,
}

impl Config {
    pub fn credential_configured(&self) -> bool {
        self.football_data_key
            .as_deref()
            .is_some_and(|k| !k.is_empty())
    }
}
