use std::sync::Arc;
use std::time::Duration;

use super::gemini::GeminiGenerator;
use super::openai::{OpenAiGenerator, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENROUTER_BASE_URL};
use crate::config::{GeneratorBackend, GeneratorConfig};
use crate::domain::{DomainError, Generator};
use crate::infrastructure::http_client::HttpClient;

/// Factory for creating generators
#[derive(Debug)]
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create the configured generator.
    ///
    /// The API key comes from the config, falling back to the backend's
    /// conventional environment variable.
    pub fn create(config: &GeneratorConfig) -> Result<Arc<dyn Generator>, DomainError> {
        let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
        let api_key = Self::api_key(config);

        let generator: Arc<dyn Generator> = match config.backend {
            GeneratorBackend::OpenAi => Arc::new(
                OpenAiGenerator::with_base_url(
                    client,
                    api_key,
                    &config.model,
                    config.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL),
                )
                .with_temperature(config.temperature),
            ),
            GeneratorBackend::OpenRouter => {
                if api_key.is_none() {
                    return Err(DomainError::configuration(
                        "OpenRouter requires generator.api_key or OPENROUTER_API_KEY",
                    ));
                }
                Arc::new(
                    OpenAiGenerator::with_base_url(
                        client,
                        api_key,
                        &config.model,
                        config
                            .base_url
                            .as_deref()
                            .unwrap_or(DEFAULT_OPENROUTER_BASE_URL),
                    )
                    .with_provider_name("openrouter")
                    .with_temperature(config.temperature),
                )
            }
            GeneratorBackend::Gemini => {
                let api_key = api_key.ok_or_else(|| {
                    DomainError::configuration(
                        "Gemini requires generator.api_key or GEMINI_API_KEY",
                    )
                })?;
                let generator = match config.base_url.as_deref() {
                    Some(base_url) => {
                        GeminiGenerator::with_base_url(client, api_key, &config.model, base_url)
                    }
                    None => GeminiGenerator::new(client, api_key, &config.model),
                };
                Arc::new(generator.with_temperature(config.temperature))
            }
        };

        tracing::info!(
            provider = generator.provider_name(),
            model = generator.model(),
            "Generator configured"
        );

        Ok(generator)
    }

    fn api_key(config: &GeneratorConfig) -> Option<String> {
        let env_var = match config.backend {
            GeneratorBackend::OpenAi => "OPENAI_API_KEY",
            GeneratorBackend::OpenRouter => "OPENROUTER_API_KEY",
            GeneratorBackend::Gemini => "GEMINI_API_KEY",
        };

        config
            .api_key
            .clone()
            .or_else(|| std::env::var(env_var).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
