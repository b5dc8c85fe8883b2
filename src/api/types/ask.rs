//! `/ask` request body

use serde::{Deserialize, Serialize};

/// Question submitted for answering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Overrides the configured number of retrieval hits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}
