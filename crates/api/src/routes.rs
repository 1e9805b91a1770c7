use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/find", post(handlers::find_subdomains))
        .route("/subdomains/{domain}", get(handlers::get_scan))
        .route("/history", get(handlers::get_history))
        .with_state(state)
}
