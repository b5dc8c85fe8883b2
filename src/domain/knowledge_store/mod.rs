//! Knowledge store domain

mod hit;
mod provider;

pub use hit::{distinct_sources, RetrievalHit};
pub use provider::KnowledgeStore;

#[cfg(test)]
pub use provider::mock::MockKnowledgeStore;
