//! Search tool implementations

mod disabled;
mod http;

use std::sync::Arc;
use std::time::Duration;

pub use disabled::DisabledSearchTool;
pub use http::HttpSearchTool;

use crate::config::SearchConfig;
use crate::domain::{DomainError, SearchTool};
use crate::infrastructure::http_client::HttpClient;

/// Create the configured search tool
pub fn create_search_tool(config: &SearchConfig) -> Result<Arc<dyn SearchTool>, DomainError> {
    if !config.enabled {
        tracing::info!("Web search disabled");
        return Ok(Arc::new(DisabledSearchTool));
    }

    let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
    tracing::info!(url = %config.url, "Using HTTP web search tool");
    Ok(Arc::new(HttpSearchTool::new(client, &config.url)))
}
