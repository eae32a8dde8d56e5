//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the orchestrator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the orchestrator service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Listener configuration (bind address, body limit).
    pub listener: ListenerConfig,

    /// Downstream automation webhook settings.
    pub downstream: DownstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Service identity reported by the health endpoint.
    pub service: ServiceConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5001").
    pub bind_address: String,

    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5001".to_string(),
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Downstream webhook configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DownstreamConfig {
    /// Webhook that receives forwarded payloads.
    pub webhook_url: String,

    /// URL probed by the health endpoint.
    pub health_url: String,

    /// Deadline for a forwarded call (connect + response body) in seconds.
    pub request_timeout_secs: u64,

    /// Deadline for a health probe in seconds.
    pub health_timeout_secs: u64,

    /// Optional connect deadline in seconds. Falls back to the request deadline.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            webhook_url: "http://n8n.default.svc.cluster.local:5678/webhook/execute".to_string(),
            health_url: "http://n8n.default.svc.cluster.local:5678/healthz".to_string(),
            request_timeout_secs: 30,
            health_timeout_secs: 5,
            connect_timeout_secs: None,
        }
    }
}

impl DownstreamConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.unwrap_or(self.request_timeout_secs))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Service identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name reported as `service` by `/health`.
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "backend".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5001");
        assert_eq!(config.downstream.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.downstream.health_timeout(), Duration::from_secs(5));
        assert_eq!(config.downstream.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.service.name, "backend");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: OrchestratorConfig = toml::from_str(
            r#"
            [downstream]
            webhook_url = "http://localhost:5678/webhook/run"
            connect_timeout_secs = 2

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.downstream.webhook_url, "http://localhost:5678/webhook/run");
        assert_eq!(config.downstream.request_timeout_secs, 30);
        assert_eq!(config.downstream.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
