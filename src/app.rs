use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, network, tutor};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let api = Router::<AppState>::new()
        .merge(tutor::router())
        .merge(network::router());

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
