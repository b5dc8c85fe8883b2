//! Per-request access log with credential headers masked

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// How a request header appears in the access log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderLogging {
    Keep,
    Mask,
    Skip,
}

fn header_logging(name: &str) -> HeaderLogging {
    match name {
        "authorization" | "proxy-authorization" | "x-api-key" | "cookie" => HeaderLogging::Mask,
        "content-type" | "content-length" | "user-agent" | "x-forwarded-for" => {
            HeaderLogging::Keep
        }
        _ => HeaderLogging::Skip,
    }
}

/// Log each request once on entry and once on completion.
///
/// The caller's `x-request-id` is reused when present, otherwise generated,
/// and is echoed on the response. Server errors are logged at warn.
/// `TraceLayer` owns the request span.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = matched_route(&request);
    let request_id = request_id(&request);

    info!(
        method = %method,
        route = %route,
        request_id = %request_id,
        headers = %loggable_headers(&request),
        "Incoming request"
    );

    let mut response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        warn!(
            method = %method,
            route = %route,
            status,
            duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            route = %route,
            status,
            duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

fn matched_route(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn loggable_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter_map(|(name, value)| match header_logging(name.as_str()) {
            HeaderLogging::Skip => None,
            HeaderLogging::Mask => Some(format!("{}=***", name)),
            HeaderLogging::Keep => Some(format!(
                "{}={}",
                name,
                value.to_str().unwrap_or("<binary>")
            )),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten user text (questions, answers) before it reaches a log line
pub fn truncate_for_log(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...[truncated {} chars]", head, total - max_chars)
    }
}
