use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Scoring and storage
        .route("/recordings/analyse", post(handlers::analyse_recording))
        .route("/recordings/recent", get(handlers::get_recent_results))
        .route("/recordings/:result_id", delete(handlers::delete_result))
        .route("/recordings", delete(handlers::clear_results))
        // Trend queries
        .route("/trends/:period", get(handlers::get_trend))
        // The companion app runs on a different origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
