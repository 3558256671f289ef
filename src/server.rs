use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::fixtures::{FixtureService, ServiceError};

pub struct AppState {
    pub service: FixtureService,
}

/// Build the Axum router. CORS is permissive; the frontend is served from
/// another origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/matches", get(matches_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// GET /api/matches — the upcoming window of scheduled fixtures.
async fn matches_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.service.list_upcoming(Utc::now()).await {
        Ok(fixtures) => (StatusCode::OK, Json(fixtures)).into_response(),
        Err(err) => {
            warn!("Fixture lookup failed: {}", err);
            error_reply(&err).into_response()
        }
    }
}

/// Wire contract for failures: a pure function of the service error.
/// Upstream failures keep the upstream status when it is an error code;
/// anything else (no status, or a 2xx with a malformed body) becomes 500,
/// so 200 is reserved for a fixture array.
fn error_reply(err: &ServiceError) -> (StatusCode, Json<serde_json::Value>) {
    match err {
        ServiceError::Unconfigured => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Football-Data.org API key not configured." })),
        ),
        ServiceError::Upstream(upstream) => {
            let status = upstream
                .status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(json!({
                    "error": "Failed to fetch matches from API.",
                    "details": upstream.detail,
                })),
            )
        }
    }
}
