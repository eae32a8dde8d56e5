//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate downstream URLs and value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: OrchestratorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::OrchestratorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid URL '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field}: must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: must not be empty")]
    Empty { field: &'static str },
}

/// Validate a loaded configuration.
pub fn validate_config(config: &OrchestratorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_http_url("downstream.webhook_url", &config.downstream.webhook_url, &mut errors);
    check_http_url("downstream.health_url", &config.downstream.health_url, &mut errors);

    if config.downstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "downstream.request_timeout_secs",
        });
    }
    if config.downstream.health_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "downstream.health_timeout_secs",
        });
    }
    if config.downstream.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout {
            field: "downstream.connect_timeout_secs",
        });
    }

    check_socket_addr("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.observability.metrics_enabled {
        check_socket_addr(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if config.service.name.trim().is_empty() {
        errors.push(ValidationError::Empty { field: "service.name" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn check_socket_addr(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
