use serde::Deserialize;

use crate::domain::{DomainError, GuardAction, GuardPolicy, RoutingConfig};
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub observability: ObservabilityConfig,
    pub embedding: EmbeddingConfig,
    pub knowledge_store: KnowledgeStoreConfig,
    pub search: SearchConfig,
    pub generator: GeneratorConfig,
    pub routing: RoutingConfig,
    pub guard: GuardConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// OpenAI-compatible embeddings endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeStoreBackend {
    #[default]
    Qdrant,
    InMemory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KnowledgeStoreConfig {
    pub backend: KnowledgeStoreBackend,
    pub url: String,
    pub collection: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// Web search tool endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub enabled: bool,
    pub url: String,
    pub top_k: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorBackend {
    OpenAi,
    OpenRouter,
    #[default]
    Gemini,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub backend: GeneratorBackend,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub toxicity_threshold: f32,
    pub input_pii: GuardAction,
    pub input_toxicity: GuardAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "all-mpnet-base-v2".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for KnowledgeStoreConfig {
    fn default() -> Self {
        Self {
            backend: KnowledgeStoreBackend::default(),
            url: "http://localhost:6333".to_string(),
            collection: "math_kb".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "http://localhost:8001".to_string(),
            top_k: 3,
            timeout_secs: 10,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: GeneratorBackend::default(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            base_url: None,
            max_tokens: 400,
            temperature: 0.0,
            timeout_secs: 30,
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        let policy = GuardPolicy::default();
        Self {
            toxicity_threshold: policy.toxicity_threshold,
            input_pii: policy.input_pii,
            input_toxicity: policy.input_toxicity,
        }
    }
}

impl GuardConfig {
    pub fn to_policy(&self) -> GuardPolicy {
        GuardPolicy::default()
            .with_toxicity_threshold(self.toxicity_threshold)
            .with_input_pii(self.input_pii)
            .with_input_toxicity(self.input_toxicity)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject out-of-range values before anything is wired up
    pub fn validate(&self) -> Result<(), DomainError> {
        self.routing.validate().map_err(DomainError::configuration)?;
        self.observability
            .validate()
            .map_err(DomainError::configuration)?;

        if !(0.0..=1.0).contains(&self.guard.toxicity_threshold) {
            return Err(DomainError::configuration(format!(
                "guard.toxicity_threshold must be between 0 and 1, got {}",
                self.guard.toxicity_threshold
            )));
        }

        if self.search.top_k == 0 {
            return Err(DomainError::configuration("search.top_k must be at least 1"));
        }

        if self.generator.max_tokens == 0 {
            return Err(DomainError::configuration(
                "generator.max_tokens must be at least 1",
            ));
        }

        if self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_none()
        {
            return Err(DomainError::configuration(
                "storage.database_url is required for the postgres backend",
            ));
        }

        Ok(())
    }
}
