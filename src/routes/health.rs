use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    llm_enabled: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

/// Process liveness plus whether a provider is configured
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    info!("GET /health - Health check");
    Json(HealthStatus {
        status: "ok",
        llm_enabled: state.llm_service.is_enabled(),
    })
}
