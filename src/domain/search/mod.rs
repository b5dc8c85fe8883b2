//! Web search domain

mod provider;
mod result;

pub use provider::SearchTool;
pub use result::{result_urls, SearchResult};

#[cfg(test)]
pub use provider::mock::MockSearchTool;
