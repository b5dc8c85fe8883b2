//! Domain layer - Core business logic and entities

pub mod answer;
pub mod embedding;
pub mod error;
pub mod feedback;
pub mod guard;
pub mod knowledge_store;
pub mod llm;
pub mod routing;
pub mod search;

pub use answer::{AnswerRecord, RouteDecision};
pub use embedding::{cosine_similarity, Embedder};
pub use error::DomainError;
pub use feedback::{
    validate_feedback, Feedback, FeedbackRepository, FeedbackValidationError, NewFeedback,
};
pub use guard::{ContentGuard, GuardAction, GuardPolicy, PolicyViolation};
pub use knowledge_store::{KnowledgeStore, RetrievalHit};
pub use llm::Generator;
pub use routing::{extract_steps, PromptKind, RetrievalConfidence, RoutingConfig};
pub use search::{SearchResult, SearchTool};

#[cfg(test)]
pub use embedding::MockEmbedder;
#[cfg(test)]
pub use feedback::MockFeedbackRepository;
#[cfg(test)]
pub use knowledge_store::MockKnowledgeStore;
#[cfg(test)]
pub use llm::MockGenerator;
#[cfg(test)]
pub use search::MockSearchTool;
