//! In-memory feedback repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, Feedback, FeedbackRepository};

/// Feedback kept in process memory, lost on restart
#[derive(Debug, Default)]
pub struct InMemoryFeedbackRepository {
    rows: RwLock<Vec<Feedback>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        let mut rows = self.rows.write().await;
        rows.push(feedback.clone());
        Ok(feedback)
    }

    async fn list(&self, limit: usize) -> Result<Vec<Feedback>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().rev().take(limit).cloned().collect())
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(true)
    }
}
