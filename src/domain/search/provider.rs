//! Search tool trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::SearchResult;

/// Secondary retrieval source used when the knowledge base is not confident.
///
/// Failures are absorbed by the implementation: an unreachable or broken
/// backend yields an empty list rather than an error.
#[async_trait]
pub trait SearchTool: Send + Sync + Debug {
    async fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult>;

    fn tool_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    pub struct MockSearchTool {
        results: Vec<SearchResult>,
        calls: AtomicUsize,
    }

    impl MockSearchTool {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
            self.results = results;
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchTool for MockSearchTool {
        async fn search(&self, _query: &str, top_k: usize) -> Vec<SearchResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results.iter().take(top_k).cloned().collect()
        }

        fn tool_name(&self) -> &'static str {
            "mock"
        }
    }
}
