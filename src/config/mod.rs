//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, EmbeddingConfig, GeneratorBackend, GeneratorConfig, GuardConfig,
    KnowledgeStoreBackend, KnowledgeStoreConfig, LogFormat, LoggingConfig, SearchConfig,
    ServerConfig, StorageBackend, StorageConfig,
};
