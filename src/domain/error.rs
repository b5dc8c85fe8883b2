use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Provider timeout: {provider}")]
    Timeout { provider: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Knowledge store error: {0}")]
    KnowledgeStore(String),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn timeout(provider: impl Into<String>) -> Self {
        Self::Timeout {
            provider: provider.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn knowledge_store(message: impl Into<String>) -> Self {
        Self::KnowledgeStore(message.into())
    }

    /// Whether the underlying call gave up waiting on the remote side
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// One-line description safe to show to end users.
    ///
    /// Names the failing party but never carries the free-form message,
    /// which may hold upstream response bodies.
    pub fn short_description(&self) -> String {
        match self {
            Self::NotFound { .. } => "resource not found".to_string(),
            Self::Validation { .. } => "invalid request".to_string(),
            Self::Provider { provider, .. } => format!("provider '{}' failed", provider),
            Self::Timeout { provider } => format!("provider '{}' timed out", provider),
            Self::Configuration { .. } => "service misconfigured".to_string(),
            Self::Internal { .. } => "internal error".to_string(),
            Self::Storage { .. } => "storage unavailable".to_string(),
            Self::KnowledgeStore(_) => "knowledge store unavailable".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Feedback 'abc' not found");
        assert_eq!(error.to_string(), "Not found: Feedback 'abc' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_timeout_error() {
        let error = DomainError::timeout("gemini");
        assert!(error.is_timeout());
        assert_eq!(error.to_string(), "Provider timeout: gemini");
        assert!(!DomainError::provider("gemini", "boom").is_timeout());
    }

    #[test]
    fn test_short_description_omits_detail() {
        let error = DomainError::provider("gemini", "HTTP 429: {\"error\": \"quota exceeded\"}");
        assert_eq!(error.short_description(), "provider 'gemini' failed");

        let error = DomainError::knowledge_store("collection math_kb not found");
        assert_eq!(error.short_description(), "knowledge store unavailable");

        assert_eq!(
            DomainError::timeout("qdrant").short_description(),
            "provider 'qdrant' timed out"
        );
    }
}
