//! Retrieval-confidence routing: gate, prompts and answer post-processing

mod config;
mod extractor;
mod prompt;

pub use config::{RetrievalConfidence, RoutingConfig};
pub use extractor::extract_steps;
pub use prompt::{knowledge_context, search_context, PromptKind};
