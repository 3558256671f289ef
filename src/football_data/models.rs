use serde::Deserialize;

/// Envelope returned by the Football-Data.org `/matches` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<RawFixture>,
}

/// One match record as the provider serves it, before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFixture {
    pub id: i64,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    /// Kick-off in UTC, e.g. "2024-03-05T18:00:00Z"
    pub utc_date: String,
    /// Absent on some feeds; normalization substitutes a sentinel league
    pub competition: Option<CompetitionRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionRef {
    pub name: String,
}

/// Failure of a single upstream fetch: transport error, non-2xx status,
/// or a body that did not deserialize.
#[derive(Debug, Clone, thiserror::Error)]
#[error("upstream error (status {status:?}): {detail}")]
pub struct UpstreamError {
    /// HTTP status from the provider, if a response was received
    pub status: Option<u16>,
    /// Upstream error body (parsed JSON when possible) or transport message
    pub detail: serde_json::Value,
}

impl UpstreamError {
    pub fn transport(message: impl Into<String>) -> Self {
        UpstreamError {
            status: None,
            detail: serde_json::Value::String(message.into()),
        }
    }

    /// Non-2xx response: keep the body as structured JSON when it parses,
    /// otherwise pass the raw text through.
    pub fn status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str(body)
            .unwrap_or_else(|_| serde_json::Value::String(body.to_string()));
        UpstreamError {
            status: Some(status),
            detail,
        }
    }

    pub fn malformed(status: u16, message: impl Into<String>) -> Self {
        UpstreamError {
            status: Some(status),
            detail: serde_json::Value::String(message.into()),
        }
    }
}
