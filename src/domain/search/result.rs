use serde::{Deserialize, Serialize};

/// A single web search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub url: String,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
        }
    }
}

/// Non-empty URLs of the given results, in order
pub fn result_urls(results: &[SearchResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| r.url.trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}
