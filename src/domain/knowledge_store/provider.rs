//! Knowledge store trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::RetrievalHit;
use crate::domain::DomainError;

/// Nearest-neighbour lookup over the curated math corpus
#[async_trait]
pub trait KnowledgeStore: Send + Sync + Debug {
    /// Return up to `top_k` hits ordered by descending score
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalHit>, DomainError>;

    /// Backend name for logs and readiness output
    fn store_name(&self) -> &'static str;

    /// Check that the backend is reachable
    async fn health_check(&self) -> Result<bool, DomainError>;
}
