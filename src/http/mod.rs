//! HTTP API server for the companion app
//!
//! This module provides a REST API around the scoring core and results store:
//! - POST /recordings/analyse - Score a transcription payload and save it
//! - GET /recordings/recent - Recently stored results
//! - DELETE /recordings/:id - Delete one result
//! - DELETE /recordings - Clear all results
//! - GET /trends/:period - Average and chart series for a trend period
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
