use async_trait::async_trait;

use crate::domain::{SearchResult, SearchTool};

/// Search tool used when web search is switched off
#[derive(Debug, Default)]
pub struct DisabledSearchTool;

#[async_trait]
impl SearchTool for DisabledSearchTool {
    async fn search(&self, _query: &str, _top_k: usize) -> Vec<SearchResult> {
        Vec::new()
    }

    fn tool_name(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_empty() {
        assert!(DisabledSearchTool.search("solve x", 3).await.is_empty());
    }
}
