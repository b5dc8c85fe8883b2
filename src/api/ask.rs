//! Question answering endpoint

use axum::extract::State;
use tracing::{error, info};

use crate::api::middleware::truncate_for_log;
use crate::api::state::AppState;
use crate::api::types::{ApiError, AskRequest, Json};
use crate::domain::AnswerRecord;

const MAX_LOGGED_QUESTION_CHARS: usize = 120;

/// POST /ask
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AnswerRecord>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::bad_request("Question cannot be empty").with_param("question"));
    }
    if request.top_k == Some(0) {
        return Err(ApiError::bad_request("top_k must be at least 1").with_param("top_k"));
    }

    info!(
        question = %truncate_for_log(request.question.trim(), MAX_LOGGED_QUESTION_CHARS),
        top_k = ?request.top_k,
        "Processing question"
    );

    let pipeline = state.pipeline.clone();
    let top_k = request.top_k.unwrap_or(pipeline.config().top_k);

    // Run on its own task so a panic surfaces as a 500 instead of a dropped connection
    let record = tokio::spawn(async move { pipeline.ask_with_top_k(&request.question, top_k).await })
        .await
        .map_err(|e| {
            error!(error = %e, "Answering task failed");
            ApiError::internal("Internal server error")
        })?;

    Ok(Json(record))
}
