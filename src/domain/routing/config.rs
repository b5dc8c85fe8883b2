//! Confidence gate configuration

use serde::{Deserialize, Serialize};

use crate::domain::knowledge_store::RetrievalHit;

/// Whether retrieval is trusted enough to ground the answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetrievalConfidence {
    /// Top hit reached the threshold
    Confident { top_score: f32 },
    /// Top hit missed the threshold, or there were no hits
    Weak { top_score: Option<f32> },
}

impl RetrievalConfidence {
    pub fn is_confident(&self) -> bool {
        matches!(self, Self::Confident { .. })
    }

    pub fn top_score(&self) -> Option<f32> {
        match self {
            Self::Confident { top_score } => Some(*top_score),
            Self::Weak { top_score } => *top_score,
        }
    }
}

/// Routing parameters shared by every request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Minimum top-hit similarity (inclusive) for the knowledge base path
    #[serde(default = "default_kb_threshold")]
    pub kb_threshold: f32,
    /// Number of hits requested from the knowledge store and search tool
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_kb_threshold() -> f32 {
    0.70
}

fn default_top_k() -> usize {
    3
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            kb_threshold: default_kb_threshold(),
            top_k: default_top_k(),
        }
    }
}

impl RoutingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the knowledge base threshold
    pub fn with_kb_threshold(mut self, threshold: f32) -> Self {
        self.kb_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the number of hits to request
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Whether a single similarity score passes the gate
    pub fn is_confident(&self, score: f32) -> bool {
        score >= self.kb_threshold
    }

    /// Gate on the first hit only; hits are never re-ordered
    pub fn assess(&self, hits: &[RetrievalHit]) -> RetrievalConfidence {
        match hits.first() {
            Some(top) if self.is_confident(top.score) => RetrievalConfidence::Confident {
                top_score: top.score,
            },
            Some(top) => RetrievalConfidence::Weak {
                top_score: Some(top.score),
            },
            None => RetrievalConfidence::Weak { top_score: None },
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.kb_threshold) {
            return Err(format!(
                "routing.kb_threshold must be between 0 and 1, got {}",
                self.kb_threshold
            ));
        }
        if self.top_k == 0 {
            return Err("routing.top_k must be at least 1".to_string());
        }
        Ok(())
    }
}
