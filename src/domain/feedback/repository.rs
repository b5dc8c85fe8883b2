//! Feedback repository trait

use async_trait::async_trait;

use super::entity::Feedback;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Append-only storage for feedback rows
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a new row
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError>;

    /// Most recent rows first, at most `limit`
    async fn list(&self, limit: usize) -> Result<Vec<Feedback>, DomainError>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> Result<bool, DomainError>;
}
