use axum::routing::{delete, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all record endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route(
            "/v1/records",
            get(handler::list_handler).post(handler::create_handler),
        )
        .route("/v1/records/:id", delete(handler::delete_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
