//! Infrastructure layer - External service implementations

pub mod embedding;
pub mod feedback;
pub mod http_client;
pub mod knowledge_store;
pub mod llm;
pub mod logging;
pub mod observability;
pub mod routing;
pub mod search;
