//! OpenAI-compatible embedding client (OpenAI, Ollama, text-embeddings-inference)

use std::sync::OnceLock;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DomainError, Embedder};
use crate::infrastructure::http_client::HttpClientTrait;

/// Embedder calling `POST {base}/v1/embeddings`
#[derive(Debug)]
pub struct OpenAiEmbedder<C: HttpClientTrait> {
    client: C,
    auth_header: Option<String>,
    base_url: String,
    model: String,
    dimensions: OnceLock<usize>,
}

impl<C: HttpClientTrait> OpenAiEmbedder<C> {
    pub fn new(
        client: C,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            auth_header: api_key.map(|key| format!("Bearer {}", key)),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            dimensions: OnceLock::new(),
        }
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![("Content-Type", "application/json")];
        if let Some(ref auth) = self.auth_header {
            headers.push(("Authorization", auth.as_str()));
        }
        headers
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<f32>, DomainError> {
        let response: EmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("embedding", format!("Failed to parse embedding response: {}", e))
        })?;

        let vector = response
            .data
            .into_iter()
            .min_by_key(|d| d.index)
            .map(|d| d.embedding)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DomainError::provider("embedding", "Empty embedding in response"))?;

        let expected = *self.dimensions.get_or_init(|| vector.len());
        if vector.len() != expected {
            return Err(DomainError::provider(
                "embedding",
                format!(
                    "Embedding dimension changed from {} to {}",
                    expected,
                    vector.len()
                ),
            ));
        }

        Ok(vector)
    }
}

#[async_trait]
impl<C: HttpClientTrait> Embedder for OpenAiEmbedder<C> {
    async fn encode(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
        });

        let response = self
            .client
            .post_json(&self.embeddings_url(), self.headers(), &body)
            .await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use serde_json::json;

    const TEST_URL: &str = "http://localhost:11434/v1/embeddings";

    #[tokio::test]
    async fn test_encode() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            json!({
                "object": "list",
                "model": "all-mpnet-base-v2",
                "data": [{ "object": "embedding", "index": 0, "embedding": [0.1, 0.2, 0.3] }]
            }),
        );
        let embedder =
            OpenAiEmbedder::new(client, "http://localhost:11434/", "all-mpnet-base-v2", None);

        let vector = embedder.encode("integrate x^2").await.unwrap();
        assert_eq!(vector, vec![0.1, 0.2, 0.3]);

        let (url, body) = embedder.client.requests().pop().unwrap();
        assert_eq!(url, TEST_URL);
        assert_eq!(body["input"], "integrate x^2");
        assert_eq!(body["model"], "all-mpnet-base-v2");
    }

    #[tokio::test]
    async fn test_empty_data_is_error() {
        let client = MockHttpClient::new().with_response(TEST_URL, json!({ "data": [] }));
        let embedder = OpenAiEmbedder::new(client, "http://localhost:11434", "m", None);

        assert!(embedder.encode("x").await.is_err());
    }

    #[test]
    fn test_dimension_must_stay_fixed() {
        let embedder = OpenAiEmbedder::new(MockHttpClient::new(), "http://x", "m", None);

        assert!(embedder
            .parse_response(json!({ "data": [{ "index": 0, "embedding": [1.0, 2.0] }] }))
            .is_ok());
        assert!(embedder
            .parse_response(json!({ "data": [{ "index": 0, "embedding": [1.0, 2.0, 3.0] }] }))
            .is_err());
    }

    #[tokio::test]
    async fn test_against_http_server() {
        use crate::infrastructure::http_client::HttpClient;
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "index": 0, "embedding": [0.5, 0.5] }]
            })))
            .mount(&server)
            .await;

        let embedder = OpenAiEmbedder::new(
            HttpClient::new(),
            server.uri(),
            "text-embedding-3-small",
            Some("secret".into()),
        );

        assert_eq!(embedder.encode("x").await.unwrap(), vec![0.5, 0.5]);
    }
}
