use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for text generators (OpenAI-compatible endpoints, Gemini, etc.)
#[async_trait]
pub trait Generator: Send + Sync + Debug {
    /// Generate a completion for a fully rendered prompt
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Model identifier sent to the provider
    fn model(&self) -> &str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    pub struct MockGenerator {
        response: String,
        error: Option<String>,
        timeout: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        pub fn new(response: impl Into<String>) -> Self {
            Self {
                response: response.into(),
                error: None,
                timeout: false,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn with_timeout(mut self) -> Self {
            self.timeout = true;
            self
        }

        /// Prompts received so far, in call order
        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Generator for MockGenerator {
        async fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, DomainError> {
            self.prompts.lock().unwrap().push(prompt.to_string());

            if self.timeout {
                return Err(DomainError::timeout("mock"));
            }
            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            Ok(self.response.clone())
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_generator_records_prompts() {
            let generator = MockGenerator::new("Steps:\n1. x = 3");

            let out = generator.generate("first", 10).await.unwrap();
            generator.generate("second", 10).await.unwrap();

            assert_eq!(out, "Steps:\n1. x = 3");
            assert_eq!(generator.prompts(), vec!["first", "second"]);
        }

        #[tokio::test]
        async fn test_mock_generator_errors() {
            let generator = MockGenerator::new("").with_error("rate limited");
            assert!(generator.generate("p", 1).await.is_err());

            let generator = MockGenerator::new("").with_timeout();
            assert!(generator.generate("p", 1).await.unwrap_err().is_timeout());
        }
    }
}
