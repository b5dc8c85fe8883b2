//! Knowledge store implementations

mod factory;
mod in_memory;
mod qdrant;

pub use factory::KnowledgeStoreFactory;
pub use in_memory::InMemoryKnowledgeStore;
pub use qdrant::QdrantKnowledgeStore;
