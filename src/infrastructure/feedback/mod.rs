//! Feedback persistence and service

mod in_memory;
mod postgres;
mod service;

use std::sync::Arc;

pub use in_memory::InMemoryFeedbackRepository;
pub use postgres::PostgresFeedbackRepository;
pub use service::{FeedbackService, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::{DomainError, FeedbackRepository};

/// Create the configured feedback repository
pub async fn create_feedback_repository(
    config: &StorageConfig,
) -> Result<Arc<dyn FeedbackRepository>, DomainError> {
    match config.backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory feedback storage");
            Ok(Arc::new(InMemoryFeedbackRepository::new()))
        }
        StorageBackend::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                DomainError::configuration("storage.database_url is required for postgres")
            })?;
            tracing::info!("Using PostgreSQL feedback storage");
            Ok(Arc::new(PostgresFeedbackRepository::connect(url).await?))
        }
    }
}
