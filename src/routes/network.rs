use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::ApiError;
use crate::models::{
    DashboardData, GenericInsights, InsightsRequest, NetworkInsightQuery, NetworkSample,
    PerformanceReport,
};
use crate::routes::ApiJson;
use crate::services::{metrics_service, network_service};
use crate::state::AppState;

const ENGINE_HEADER: (&str, &str) = ("X-AI-Engine", "NetworkPulsePro v2.0");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/network-insight-query", post(network_insight_query))
        .route("/dashboard-data", get(dashboard_data))
        .route("/network-performance", get(network_performance))
        .route("/network-data", get(network_data))
        .route("/generic-insights", post(generic_insights))
}

/// POST /api/network-insight-query
///
/// Request body: `{ "query": "...", "historicalData": { ... } }` (historicalData optional)
/// Returns: the structured insight plus `colorCodes` and `emoji`
#[axum::debug_handler]
async fn network_insight_query(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NetworkInsightQuery>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/network-insight-query");

    let insight = network_service::analyze_query(
        &state.llm_service,
        state.placeholders.as_ref(),
        request,
    )
    .await
    .map_err(|e| {
        error!("Network insight query failed: {}", e);
        let api = ApiError::from_app(&e, "🚨 Critical System Error");
        if api.status.is_server_error() {
            api.with_message("Our AI engines are overheating! Try again later.")
                .with_debug(e.to_string(), state.expose_error_details)
        } else {
            api
        }
    })?;

    Ok(([ENGINE_HEADER], Json(insight)))
}

/// GET /api/dashboard-data
async fn dashboard_data() -> Json<DashboardData> {
    info!("GET /api/dashboard-data");
    Json(metrics_service::dashboard_data())
}

/// GET /api/network-performance
///
/// Returns: `{ "performanceData": [bandwidth, latency, packetLoss], "analysis": "..." }`
async fn network_performance(
    State(state): State<AppState>,
) -> Result<Json<PerformanceReport>, ApiError> {
    info!("GET /api/network-performance");

    let report = network_service::analyze_performance(&state.llm_service)
        .await
        .map_err(|e| {
            error!("Error generating network analysis: {}", e);
            ApiError::from_app(&e, "Failed to analyze network performance")
        })?;

    Ok(Json(report))
}

/// GET /api/network-data
async fn network_data() -> Json<NetworkSample> {
    info!("GET /api/network-data");
    Json(metrics_service::sample_network())
}

/// POST /api/generic-insights
///
/// Request body: `{ "bandwidth": 72.1, "latency": 40.3, "downtime": 1.2 }`
#[axum::debug_handler]
async fn generic_insights(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InsightsRequest>,
) -> Result<Json<GenericInsights>, ApiError> {
    info!("POST /api/generic-insights - {:?}", request);

    let insights = network_service::generic_insights(&state.llm_service, request)
        .await
        .map_err(|e| {
            error!("Error fetching insights: {}", e);
            ApiError::from_app(&e, "Failed to fetch insights").with_details(e.to_string())
        })?;

    Ok(Json(insights))
}
