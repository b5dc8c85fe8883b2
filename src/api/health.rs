//! Liveness and readiness endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;
use crate::domain::DomainError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
    Unhealthy,
}

/// Status of one dependency
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ms: u64,
}

impl HealthCheck {
    fn from_probe(name: &str, result: Result<bool, DomainError>, start: Instant) -> Self {
        let (status, message) = match result {
            Ok(true) => (HealthStatus::Ok, None),
            Ok(false) => (HealthStatus::Unhealthy, Some("not reachable".to_string())),
            Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
        };

        Self {
            name: name.to_string(),
            status,
            message,
            latency_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Ok,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready
///
/// Feedback storage is required; a knowledge store outage only degrades
/// answers to the search and fallback paths.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let probe = Instant::now();
    let storage = HealthCheck::from_probe(
        "feedback_storage",
        state.feedback_service.health_check().await,
        probe,
    );

    let probe = Instant::now();
    let store = state.pipeline.knowledge_store();
    let knowledge_store = HealthCheck::from_probe(store.store_name(), store.health_check().await, probe);

    let status = if storage.status != HealthStatus::Ok {
        HealthStatus::Unhealthy
    } else if knowledge_store.status != HealthStatus::Ok {
        HealthStatus::Degraded
    } else {
        HealthStatus::Ok
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![storage, knowledge_store]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        HealthStatus::Ok | HealthStatus::Degraded => StatusCode::OK,
    };

    (status_code, Json(response))
}
