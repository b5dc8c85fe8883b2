//! `/feedback` bodies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Feedback;

/// Returned after a feedback row is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreated {
    pub status: String,
    pub id: Uuid,
}

impl FeedbackCreated {
    pub fn saved(id: Uuid) -> Self {
        Self {
            status: "saved".to_string(),
            id,
        }
    }
}

/// Query parameters for listing feedback
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackQueryParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackListResponse {
    pub feedback: Vec<Feedback>,
    pub total: usize,
}

impl From<Vec<Feedback>> for FeedbackListResponse {
    fn from(feedback: Vec<Feedback>) -> Self {
        Self {
            total: feedback.len(),
            feedback,
        }
    }
}
