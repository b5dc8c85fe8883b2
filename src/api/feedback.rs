//! Feedback endpoints

use axum::extract::{Query, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, FeedbackCreated, FeedbackListResponse, FeedbackQueryParams, Json,
};
use crate::domain::NewFeedback;

/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<NewFeedback>,
) -> Result<Json<FeedbackCreated>, ApiError> {
    let saved = state.feedback_service.submit(request).await?;

    Ok(Json(FeedbackCreated::saved(saved.id())))
}

/// GET /feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(params): Query<FeedbackQueryParams>,
) -> Result<Json<FeedbackListResponse>, ApiError> {
    debug!(limit = ?params.limit, "Listing feedback");

    let feedback = state.feedback_service.list(params.limit).await?;

    Ok(Json(feedback.into()))
}
