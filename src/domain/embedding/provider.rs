//! Embedder trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Maps a text to a fixed-dimension vector.
///
/// Implementations must return vectors of the same length for every call
/// made against the same model.
#[async_trait]
pub trait Embedder: Send + Sync + Debug {
    /// Encode a single text
    async fn encode(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for encoding
    fn model(&self) -> &str;
}
