//! Request and response bodies

pub mod ask;
pub mod error;
pub mod feedback;
pub mod json;

pub use ask::AskRequest;
pub use error::{ApiError, ApiErrorResponse};
pub use feedback::{FeedbackCreated, FeedbackListResponse, FeedbackQueryParams};
pub use json::Json;
