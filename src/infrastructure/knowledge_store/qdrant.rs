//! Qdrant knowledge store over the REST API

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DomainError, KnowledgeStore, RetrievalHit};
use crate::infrastructure::http_client::HttpClientTrait;

#[derive(Debug)]
pub struct QdrantKnowledgeStore<C: HttpClientTrait> {
    client: C,
    base_url: String,
    collection: String,
    api_key: Option<String>,
}

impl<C: HttpClientTrait> QdrantKnowledgeStore<C> {
    pub fn new(
        client: C,
        base_url: impl Into<String>,
        collection: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection: collection.into(),
            api_key,
        }
    }

    fn search_url(&self) -> String {
        format!(
            "{}/collections/{}/points/search",
            self.base_url, self.collection
        )
    }

    fn collection_url(&self) -> String {
        format!("{}/collections/{}", self.base_url, self.collection)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![("Content-Type", "application/json")];
        if let Some(ref key) = self.api_key {
            headers.push(("api-key", key.as_str()));
        }
        headers
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<RetrievalHit>, DomainError> {
        let response: SearchResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::knowledge_store(format!("Failed to parse Qdrant response: {}", e))
        })?;

        Ok(response
            .result
            .into_iter()
            .map(ScoredPoint::into_hit)
            .collect())
    }
}

#[async_trait]
impl<C: HttpClientTrait> KnowledgeStore for QdrantKnowledgeStore<C> {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<RetrievalHit>, DomainError> {
        let body = serde_json::json!({
            "vector": vector,
            "limit": top_k,
            "with_payload": true,
        });

        let response = self
            .client
            .post_json(&self.search_url(), self.headers(), &body)
            .await
            .map_err(|e| match e {
                DomainError::Timeout { .. } => DomainError::timeout("qdrant"),
                other => DomainError::knowledge_store(other.to_string()),
            })?;

        self.parse_response(response)
    }

    fn store_name(&self) -> &'static str {
        "qdrant"
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        match self
            .client
            .get_json(&self.collection_url(), self.headers())
            .await
        {
            Ok(json) => Ok(json.get("status").and_then(|s| s.as_str()) == Some("ok")),
            Err(e) => {
                tracing::warn!(collection = %self.collection, error = %e, "Qdrant health check failed");
                Ok(false)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<ScoredPoint>,
}

#[derive(Debug, Deserialize)]
struct ScoredPoint {
    score: f32,
    #[serde(default)]
    payload: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ScoredPoint {
    fn into_hit(self) -> RetrievalHit {
        let payload = self.payload.unwrap_or_default();
        let text = ["text", "text_excerpt"]
            .iter()
            .find_map(|key| payload.get(*key).and_then(|v| v.as_str()))
            .unwrap_or_default();

        let hit = RetrievalHit::new(self.score.clamp(0.0, 1.0), text);
        match payload.get("source").and_then(|v| v.as_str()) {
            Some(source) if !source.is_empty() => hit.with_source(source),
            _ => hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use serde_json::json;

    const SEARCH_URL: &str = "http://localhost:6333/collections/math_kb/points/search";

    fn store(client: MockHttpClient) -> QdrantKnowledgeStore<MockHttpClient> {
        QdrantKnowledgeStore::new(client, "http://localhost:6333/", "math_kb", None)
    }

    #[tokio::test]
    async fn test_query_maps_payload() {
        let client = MockHttpClient::new().with_response(
            SEARCH_URL,
            json!({
                "status": "ok",
                "time": 0.001,
                "result": [
                    { "id": 1, "score": 0.91, "payload": { "text": "Quadratic formula", "source": "algebra.md" } },
                    { "id": 2, "score": 0.65, "payload": { "text_excerpt": "Vieta's formulas" } },
                    { "id": 3, "score": -0.2 }
                ]
            }),
        );
        let store = store(client);

        let hits = store.query(&[0.1, 0.2], 3).await.unwrap();

        assert_eq!(hits.len(), 3);
        assert_eq!(
            hits[0],
            RetrievalHit::new(0.91, "Quadratic formula").with_source("algebra.md")
        );
        assert_eq!(hits[1].text, "Vieta's formulas");
        assert!(hits[1].source.is_none());
        assert_eq!(hits[2].score, 0.0);
        assert_eq!(hits[2].text, "");

        let (_, body) = store.client.requests().pop().unwrap();
        assert_eq!(body["limit"], 3);
        assert_eq!(body["with_payload"], true);
    }

    #[tokio::test]
    async fn test_query_error_is_knowledge_store_error() {
        let store = store(MockHttpClient::new().with_error(SEARCH_URL, "connection refused"));

        let err = store.query(&[0.1], 3).await.unwrap_err();
        assert!(matches!(err, DomainError::KnowledgeStore(_)));
    }

    #[tokio::test]
    async fn test_query_timeout_is_kept() {
        let store = store(MockHttpClient::new().with_timeout(SEARCH_URL));

        assert!(store.query(&[0.1], 3).await.unwrap_err().is_timeout());
    }

    #[tokio::test]
    async fn test_health_check() {
        let client = MockHttpClient::new().with_response(
            "http://localhost:6333/collections/math_kb",
            json!({ "status": "ok", "result": {} }),
        );
        assert!(store(client).health_check().await.unwrap());
        assert!(!store(MockHttpClient::new()).health_check().await.unwrap());
    }
}
