//! Settings for trace export and the Prometheus endpoint

use serde::Deserialize;

/// Paths the HTTP router already serves; the metrics endpoint may not shadow them.
const RESERVED_PATHS: &[&str] = &["/ask", "/feedback", "/health", "/ready"];

/// `observability` section of the application config
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
}

/// OTLP span export. Off unless `APP__OBSERVABILITY__TRACING__ENABLED=true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    pub enabled: bool,
    /// gRPC collector address
    pub otlp_endpoint: String,
    pub service_name: String,
    /// Fraction of ask requests whose spans are exported
    pub sampling_ratio: f64,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            service_name: "tutor-gateway".to_string(),
            sampling_ratio: 1.0,
        }
    }
}

/// Route, guard and collaborator counters served in Prometheus text format
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl ObservabilityConfig {
    pub fn validate(&self) -> Result<(), String> {
        let tracing = &self.tracing;
        if !(0.0..=1.0).contains(&tracing.sampling_ratio) {
            return Err(format!(
                "observability.tracing.sampling_ratio must be between 0 and 1, got {}",
                tracing.sampling_ratio
            ));
        }
        if tracing.enabled
            && !(tracing.otlp_endpoint.starts_with("http://")
                || tracing.otlp_endpoint.starts_with("https://"))
        {
            return Err(format!(
                "observability.tracing.otlp_endpoint must be an http(s) URL, got '{}'",
                tracing.otlp_endpoint
            ));
        }

        let path = &self.metrics.path;
        if self.metrics.enabled {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(format!(
                    "observability.metrics.path must start with '/' and name a route, got '{}'",
                    path
                ));
            }
            if RESERVED_PATHS.contains(&path.as_str()) {
                return Err(format!(
                    "observability.metrics.path '{}' collides with an API route",
                    path
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ObservabilityConfig::default();

        assert!(!config.tracing.enabled);
        assert_eq!(config.tracing.service_name, "tutor-gateway");
        assert_eq!(config.tracing.sampling_ratio, 1.0);
        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.path, "/metrics");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: ObservabilityConfig =
            serde_json::from_str(r#"{"tracing":{"enabled":true,"sampling_ratio":0.1}}"#).unwrap();

        assert!(config.tracing.enabled);
        assert_eq!(config.tracing.sampling_ratio, 0.1);
        assert_eq!(config.tracing.otlp_endpoint, "http://localhost:4317");
        assert_eq!(config.metrics.path, "/metrics");
    }

    #[test]
    fn test_sampling_ratio_out_of_range() {
        let mut config = ObservabilityConfig::default();
        config.tracing.sampling_ratio = 1.5;

        let err = config.validate().unwrap_err();
        assert!(err.contains("sampling_ratio"));
    }

    #[test]
    fn test_enabled_tracing_needs_url_endpoint() {
        let mut config = ObservabilityConfig::default();
        config.tracing.otlp_endpoint = "localhost:4317".to_string();
        assert!(config.validate().is_ok());

        config.tracing.enabled = true;
        assert!(config.validate().unwrap_err().contains("otlp_endpoint"));
    }

    #[test]
    fn test_metrics_path_cannot_shadow_api_routes() {
        let mut config = ObservabilityConfig::default();
        config.metrics.path = "/ask".to_string();
        assert!(config.validate().unwrap_err().contains("collides"));

        config.metrics.path = "metrics".to_string();
        assert!(config.validate().is_err());

        config.metrics.enabled = false;
        assert!(config.validate().is_ok());
    }
}
