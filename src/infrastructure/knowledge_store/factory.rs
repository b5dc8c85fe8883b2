//! Knowledge store factory

use std::sync::Arc;
use std::time::Duration;

use super::{InMemoryKnowledgeStore, QdrantKnowledgeStore};
use crate::config::{KnowledgeStoreBackend, KnowledgeStoreConfig};
use crate::domain::{DomainError, KnowledgeStore};
use crate::infrastructure::http_client::HttpClient;

#[derive(Debug)]
pub struct KnowledgeStoreFactory;

impl KnowledgeStoreFactory {
    /// Create the configured knowledge store
    pub fn create(config: &KnowledgeStoreConfig) -> Result<Arc<dyn KnowledgeStore>, DomainError> {
        match config.backend {
            KnowledgeStoreBackend::Qdrant => {
                let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
                tracing::info!(
                    url = %config.url,
                    collection = %config.collection,
                    "Using Qdrant knowledge store"
                );
                Ok(Arc::new(QdrantKnowledgeStore::new(
                    client,
                    &config.url,
                    &config.collection,
                    config.api_key.clone(),
                )))
            }
            KnowledgeStoreBackend::InMemory => {
                tracing::info!("Using in-memory knowledge store");
                Ok(Arc::new(InMemoryKnowledgeStore::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_backends() {
        let mut config = KnowledgeStoreConfig::default();
        assert_eq!(KnowledgeStoreFactory::create(&config).unwrap().store_name(), "qdrant");

        config.backend = KnowledgeStoreBackend::InMemory;
        assert_eq!(
            KnowledgeStoreFactory::create(&config).unwrap().store_name(),
            "in_memory"
        );
    }
}
