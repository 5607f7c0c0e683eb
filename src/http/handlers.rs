use super::state::AppState;
use crate::analysis::{analyse, PerformanceResult};
use crate::feedback::{generate_feedback, FeedbackResult};
use crate::storage::{ChartDataPoint, StoredPerformanceResult, TrendPeriod};
use crate::transcription::TranscriptionPayload;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyseRequest {
    /// The prompt the learner was responding to
    #[serde(default)]
    pub prompt: String,

    /// Filename of the recorded audio artifact
    #[serde(default)]
    pub audio_file_name: String,

    /// The transcription result from the STT service
    pub payload: TranscriptionPayload,
}

#[derive(Debug, Serialize)]
pub struct AnalyseResponse {
    pub id: Uuid,
    pub metrics: PerformanceResult,
    pub feedback: FeedbackResult,
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub period: TrendPeriod,
    pub average: f64,
    pub chart: Vec<ChartDataPoint>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /recordings/analyse
/// Score a transcription payload, generate feedback, and save the result
pub async fn analyse_recording(
    State(state): State<AppState>,
    Json(req): Json<AnalyseRequest>,
) -> impl IntoResponse {
    info!(
        "Analysing recording ({} words, {:.1}s)",
        req.payload.words.len(),
        req.payload.duration
    );

    let metrics = analyse(&req.payload);
    let feedback = generate_feedback(&metrics);

    let saved = {
        let mut store = state.store.write().await;
        store
            .save(&req.prompt, &metrics, &feedback, &req.audio_file_name)
            .await
    };

    match saved {
        Ok(record) => (
            StatusCode::OK,
            Json(AnalyseResponse {
                id: record.id,
                metrics,
                feedback,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to save result: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to save result: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /recordings/recent?limit=N
/// The most recently stored results, newest first (default 10)
pub async fn get_recent_results(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    let results: Vec<StoredPerformanceResult> = store.get_recent(params.limit.unwrap_or(10));

    (StatusCode::OK, Json(results)).into_response()
}

/// DELETE /recordings/:result_id
/// Delete one stored result by identity
pub async fn delete_result(
    State(state): State<AppState>,
    Path(result_id): Path<Uuid>,
) -> impl IntoResponse {
    let deleted = {
        let mut store = state.store.write().await;
        store.delete(result_id).await
    };

    match deleted {
        Ok(true) => (
            StatusCode::OK,
            Json(DeleteResponse {
                status: "deleted".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Result {} not found", result_id),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete result: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to delete result: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// DELETE /recordings
/// Clear all stored results
pub async fn clear_results(State(state): State<AppState>) -> impl IntoResponse {
    let cleared = {
        let mut store = state.store.write().await;
        store.clear().await
    };

    match cleared {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                status: "cleared".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to clear results: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to clear results: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /trends/:period
/// Average score and chart series for daily/weekly/monthly trends
pub async fn get_trend(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> impl IntoResponse {
    let period: TrendPeriod = match period.parse() {
        Ok(p) => p,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!(
                        "Unknown trend period '{}' (expected daily, weekly, or monthly)",
                        period
                    ),
                }),
            )
                .into_response();
        }
    };

    let now = Utc::now();
    let store = state.store.read().await;

    (
        StatusCode::OK,
        Json(TrendResponse {
            period,
            average: store.average_score(period, now),
            chart: store.chart_series(period, now),
        }),
    )
        .into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
