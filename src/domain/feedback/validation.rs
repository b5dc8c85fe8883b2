//! Feedback validation

use thiserror::Error;

use super::entity::{Feedback, NewFeedback};
use crate::domain::answer::RouteDecision;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedbackValidationError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Answer cannot be empty")]
    EmptyAnswer,

    #[error("Rating must be a number between {min} and {max}")]
    RatingOutOfRange { min: f32, max: f32 },

    #[error("Comment exceeds maximum length of {0} characters")]
    CommentTooLong(usize),

    #[error("Unknown route '{0}'")]
    UnknownRoute(String),
}

pub const MIN_RATING: f32 = 0.0;
pub const MAX_RATING: f32 = 5.0;
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Validate submitted feedback and turn it into a storable row
pub fn validate_feedback(input: NewFeedback) -> Result<Feedback, FeedbackValidationError> {
    let question = input.question.trim();
    if question.is_empty() {
        return Err(FeedbackValidationError::EmptyQuestion);
    }

    let answer = input.answer.trim();
    if answer.is_empty() {
        return Err(FeedbackValidationError::EmptyAnswer);
    }

    let mut feedback = Feedback::new(question, answer);

    if let Some(rating) = input.rating {
        if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackValidationError::RatingOutOfRange {
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }
        feedback = feedback.with_rating(rating);
    }

    if let Some(comment) = input.comment {
        if comment.chars().count() > MAX_COMMENT_LENGTH {
            return Err(FeedbackValidationError::CommentTooLong(MAX_COMMENT_LENGTH));
        }
        if !comment.trim().is_empty() {
            feedback = feedback.with_comment(comment);
        }
    }

    if let Some(route) = input.route.filter(|r| !r.trim().is_empty()) {
        let route = route
            .parse::<RouteDecision>()
            .map_err(|_| FeedbackValidationError::UnknownRoute(route.clone()))?;
        feedback = feedback.with_route(route);
    }

    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewFeedback {
        NewFeedback {
            question: "Solve x + 2 = 5".to_string(),
            answer: "Steps:\nx = 3".to_string(),
            rating: None,
            comment: None,
            route: None,
        }
    }

    #[test]
    fn test_valid_feedback() {
        let feedback = validate_feedback(NewFeedback {
            rating: Some(5.0),
            comment: Some("great".into()),
            route: Some("search".into()),
            ..input()
        })
        .unwrap();

        assert_eq!(feedback.rating(), Some(5.0));
        assert_eq!(feedback.route(), Some(RouteDecision::Search));
    }

    #[test]
    fn test_empty_question_and_answer() {
        let err = validate_feedback(NewFeedback {
            question: "   ".into(),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err, FeedbackValidationError::EmptyQuestion);

        let err = validate_feedback(NewFeedback {
            answer: String::new(),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err, FeedbackValidationError::EmptyAnswer);
    }

    #[test]
    fn test_rating_bounds() {
        for bad in [-0.5, 5.5, f32::NAN, f32::INFINITY] {
            let result = validate_feedback(NewFeedback {
                rating: Some(bad),
                ..input()
            });
            assert!(result.is_err(), "rating {bad} accepted");
        }

        assert!(validate_feedback(NewFeedback {
            rating: Some(0.0),
            ..input()
        })
        .is_ok());
    }

    #[test]
    fn test_comment_length() {
        let err = validate_feedback(NewFeedback {
            comment: Some("x".repeat(MAX_COMMENT_LENGTH + 1)),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err, FeedbackValidationError::CommentTooLong(MAX_COMMENT_LENGTH));
    }

    #[test]
    fn test_unknown_route() {
        let err = validate_feedback(NewFeedback {
            route: Some("mcp".into()),
            ..input()
        })
        .unwrap_err();
        assert_eq!(err, FeedbackValidationError::UnknownRoute("mcp".into()));
    }

    #[test]
    fn test_blank_route_is_ignored() {
        let feedback = validate_feedback(NewFeedback {
            route: Some("".into()),
            ..input()
        })
        .unwrap();
        assert!(feedback.route().is_none());
    }
}
