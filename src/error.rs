//! Crate-level error type for startup and wiring failures.
//!
//! Request handling never returns these: downstream failures are data
//! (`DownstreamOutcome`), not errors.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// A configured URL did not parse.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Socket bind/accept failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metrics exporter could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
