use serde::{Deserialize, Serialize};

/// A passage returned by the knowledge store with its similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalHit {
    /// Similarity in [0, 1], higher is more similar
    pub score: f32,
    /// Passage text
    pub text: String,
    /// Document identifier the passage came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RetrievalHit {
    pub fn new(score: f32, text: impl Into<String>) -> Self {
        Self {
            score,
            text: text.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Sources of the given hits, de-duplicated in first-seen order
pub fn distinct_sources(hits: &[RetrievalHit]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for source in hits.iter().filter_map(|h| h.source.as_deref()) {
        if !sources.iter().any(|s| s == source) {
            sources.push(source.to_string());
        }
    }
    sources
}
