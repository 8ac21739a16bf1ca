use axum::{extract::State, http::StatusCode, Json};

use super::AppState;
use crate::models::FeedbackRequest;

/// Accepts a like or dislike; unknown segments are silently dropped
pub async fn submit(
    State(state): State<AppState>,
    Json(feedback): Json<FeedbackRequest>,
) -> StatusCode {
    // Recorded against the segment history, which keeps a bounded window
    state.engine.submit_feedback(&feedback).await;
    StatusCode::ACCEPTED
}
