//! Guarded retrieval-confidence routing

mod pipeline;

pub use pipeline::{RoutingPipeline, REFUSAL_MESSAGE, SAFETY_FALLBACK_MESSAGE};
