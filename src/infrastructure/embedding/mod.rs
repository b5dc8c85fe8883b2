//! Embedder implementations

mod openai;

use std::sync::Arc;
use std::time::Duration;

pub use openai::OpenAiEmbedder;

use crate::config::EmbeddingConfig;
use crate::domain::{DomainError, Embedder};
use crate::infrastructure::http_client::HttpClient;

/// Create the configured embedder
pub fn create_embedder(config: &EmbeddingConfig) -> Result<Arc<dyn Embedder>, DomainError> {
    let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
    let api_key = config
        .api_key
        .clone()
        .or_else(|| std::env::var("EMBEDDING_API_KEY").ok());

    tracing::info!(url = %config.base_url, model = %config.model, "Using OpenAI-compatible embedder");
    Ok(Arc::new(OpenAiEmbedder::new(
        client,
        &config.base_url,
        &config.model,
        api_key,
    )))
}
