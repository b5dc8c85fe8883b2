//! Feedback service

use std::sync::Arc;

use crate::domain::{validate_feedback, DomainError, Feedback, FeedbackRepository, NewFeedback};

/// Default and maximum page sizes for listing feedback
pub const DEFAULT_LIST_LIMIT: usize = 50;
pub const MAX_LIST_LIMIT: usize = 500;

/// Validates and stores user feedback
#[derive(Clone)]
pub struct FeedbackService {
    repository: Arc<dyn FeedbackRepository>,
}

impl std::fmt::Debug for FeedbackService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackService").finish()
    }
}

impl FeedbackService {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit(&self, input: NewFeedback) -> Result<Feedback, DomainError> {
        let feedback =
            validate_feedback(input).map_err(|e| DomainError::validation(e.to_string()))?;

        let saved = self.repository.create(feedback).await?;

        tracing::info!(
            feedback_id = %saved.id(),
            rating = ?saved.rating(),
            route = ?saved.route().map(|r| r.as_str()),
            "Feedback saved"
        );

        Ok(saved)
    }

    /// Newest first; `None` uses the default page size and values above the maximum are capped
    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<Feedback>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
        self.repository.list(limit).await
    }

    pub async fn health_check(&self) -> Result<bool, DomainError> {
        self.repository.health_check().await
    }
}
