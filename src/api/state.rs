//! Shared application state

use std::sync::Arc;

use crate::infrastructure::feedback::FeedbackService;
use crate::infrastructure::routing::RoutingPipeline;

/// Process-scoped context handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub pipeline: Arc<RoutingPipeline>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    pub fn new(pipeline: Arc<RoutingPipeline>, feedback_service: Arc<FeedbackService>) -> Self {
        Self {
            pipeline,
            feedback_service,
        }
    }
}
