//! PostgreSQL feedback repository

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use uuid::Uuid;

use crate::domain::{DomainError, Feedback, FeedbackRepository, RouteDecision};

const TABLE_NAME: &str = "feedback";

/// Feedback stored in a single append-only table
#[derive(Debug, Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and make sure the table exists
    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        let repo = Self::new(pool);
        repo.ensure_table().await?;
        Ok(repo)
    }

    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                rating REAL,
                comment TEXT,
                route TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            TABLE_NAME
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create feedback table: {}", e)))?;

        Ok(())
    }

    fn row_to_feedback(row: &sqlx::postgres::PgRow) -> Result<Feedback, DomainError> {
        let map_err = |e: sqlx::Error| DomainError::storage(format!("Invalid feedback row: {}", e));

        let id: Uuid = row.try_get("id").map_err(map_err)?;
        let question: String = row.try_get("question").map_err(map_err)?;
        let answer: String = row.try_get("answer").map_err(map_err)?;
        let rating: Option<f32> = row.try_get("rating").map_err(map_err)?;
        let comment: Option<String> = row.try_get("comment").map_err(map_err)?;
        let route: Option<String> = row.try_get("route").map_err(map_err)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_err)?;

        // Unknown tags from older rows are dropped rather than failing the listing
        let route = route.and_then(|r| r.parse::<RouteDecision>().ok());

        Ok(Feedback::from_parts(
            id, question, answer, rating, comment, route, created_at,
        ))
    }
}

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        let query = format!(
            r#"
            INSERT INTO {} (id, question, answer, rating, comment, route, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
            TABLE_NAME
        );

        sqlx::query(&query)
            .bind(feedback.id())
            .bind(feedback.question())
            .bind(feedback.answer())
            .bind(feedback.rating())
            .bind(feedback.comment())
            .bind(feedback.route().map(|r| r.as_str()))
            .bind(feedback.created_at())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save feedback: {}", e)))?;

        Ok(feedback)
    }

    async fn list(&self, limit: usize) -> Result<Vec<Feedback>, DomainError> {
        let query = format!(
            r#"
            SELECT id, question, answer, rating, comment, route, created_at
            FROM {}
            ORDER BY created_at DESC
            LIMIT $1
            "#,
            TABLE_NAME
        );

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list feedback: {}", e)))?;

        rows.iter().map(Self::row_to_feedback).collect()
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| true)
            .map_err(|e| DomainError::storage(format!("Health check failed: {}", e)))
    }
}
