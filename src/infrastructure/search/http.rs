//! Web search over an HTTP tool endpoint

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{SearchResult, SearchTool};
use crate::infrastructure::http_client::HttpClientTrait;

/// Calls `POST {url}/tools/websearch {query, top_k}` and expects `{results: [...]}`
#[derive(Debug)]
pub struct HttpSearchTool<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> HttpSearchTool<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/tools/websearch", self.base_url)
    }
}

#[async_trait]
impl<C: HttpClientTrait> SearchTool for HttpSearchTool<C> {
    async fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let body = serde_json::json!({ "query": query, "top_k": top_k });
        let headers = vec![("Content-Type", "application/json")];

        let json = match self.client.post_json(&self.search_url(), headers, &body).await {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Web search failed, continuing without results");
                return Vec::new();
            }
        };

        match serde_json::from_value::<SearchResponse>(json) {
            Ok(response) => {
                let mut results = response.results;
                results.truncate(top_k);
                results
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unexpected web search response, continuing without results");
                Vec::new()
            }
        }
    }

    fn tool_name(&self) -> &'static str {
        "http"
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;
    use serde_json::json;

    const TEST_URL: &str = "http://localhost:8001/tools/websearch";

    #[tokio::test]
    async fn test_search_returns_results() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            json!({
                "results": [
                    { "title": "Chain rule", "snippet": "d/dx f(g(x))", "url": "https://a" },
                    { "title": "Product rule", "snippet": "(fg)'", "url": "https://b" },
                    { "title": "Quotient rule", "snippet": "(f/g)'", "url": "https://c" }
                ]
            }),
        );
        let tool = HttpSearchTool::new(client, "http://localhost:8001");

        let results = tool.search("differentiate sin(x^2)", 2).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://a");

        let (_, body) = tool.client.requests().pop().unwrap();
        assert_eq!(body["query"], "differentiate sin(x^2)");
        assert_eq!(body["top_k"], 2);
    }

    #[tokio::test]
    async fn test_failure_yields_empty() {
        let tool = HttpSearchTool::new(
            MockHttpClient::new().with_error(TEST_URL, "connection refused"),
            "http://localhost:8001",
        );
        assert!(tool.search("x", 3).await.is_empty());

        let tool = HttpSearchTool::new(
            MockHttpClient::new().with_response(TEST_URL, json!({ "results": "nope" })),
            "http://localhost:8001",
        );
        assert!(tool.search("x", 3).await.is_empty());
    }
}
