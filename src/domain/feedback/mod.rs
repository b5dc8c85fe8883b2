//! User feedback on answers

mod entity;
mod repository;
mod validation;

pub use entity::{Feedback, NewFeedback};
pub use repository::FeedbackRepository;
pub use validation::{
    validate_feedback, FeedbackValidationError, MAX_COMMENT_LENGTH, MAX_RATING, MIN_RATING,
};

#[cfg(test)]
pub use repository::MockFeedbackRepository;
