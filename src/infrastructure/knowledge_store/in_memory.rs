//! In-memory knowledge store for local runs and tests

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{cosine_similarity, DomainError, KnowledgeStore, RetrievalHit};

#[derive(Debug, Clone)]
struct StoredPassage {
    vector: Vec<f32>,
    text: String,
    source: Option<String>,
}

/// Brute-force cosine search over passages held in memory
#[derive(Debug, Default)]
pub struct InMemoryKnowledgeStore {
    passages: RwLock<Vec<StoredPassage>>,
}

impl InMemoryKnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a passage with its precomputed vector
    pub async fn insert(&self, vector: Vec<f32>, text: impl Into<String>, source: Option<String>) {
        self.passages.write().await.push(StoredPassage {
            vector,
            text: text.into(),
            source,
        });
    }

    pub async fn len(&self) -> usize {
        self.passages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.passages.read().await.is_empty()
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalHit>, DomainError> {
        let passages = self.passages.read().await;

        let mut hits: Vec<RetrievalHit> = passages
            .iter()
            .map(|p| {
                let score = cosine_similarity(vector, &p.vector).clamp(0.0, 1.0);
                let hit = RetrievalHit::new(score, p.text.clone());
                match &p.source {
                    Some(source) => hit.with_source(source.clone()),
                    None => hit,
                }
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(top_k);

        Ok(hits)
    }

    fn store_name(&self) -> &'static str {
        "in_memory"
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(true)
    }
}
