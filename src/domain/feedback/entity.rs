//! Feedback entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::answer::RouteDecision;

/// Feedback as submitted by a client, before it is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

/// A stored, append-only feedback row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    id: Uuid,
    question: String,
    answer: String,
    rating: Option<f32>,
    comment: Option<String>,
    route: Option<RouteDecision>,
    created_at: DateTime<Utc>,
}

impl Feedback {
    /// Create a new feedback row with a fresh id and timestamp
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            answer: answer.into(),
            rating: None,
            comment: None,
            route: None,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a row loaded from storage
    pub fn from_parts(
        id: Uuid,
        question: String,
        answer: String,
        rating: Option<f32>,
        comment: Option<String>,
        route: Option<RouteDecision>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            question,
            answer,
            rating,
            comment,
            route,
            created_at,
        }
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_route(mut self, route: RouteDecision) -> Self {
        self.route = Some(route);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn route(&self) -> Option<RouteDecision> {
        self.route
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
