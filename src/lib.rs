//! Webhook orchestrator library.
//!
//! Forwards JSON payloads to a downstream automation webhook and reports
//! whether that webhook is reachable.

pub mod config;
pub mod error;
pub mod forwarding;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::OrchestratorConfig;
pub use error::OrchestratorError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
