//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment overrides (loader.rs)
//!     → validation.rs (semantic checks)
//!     → OrchestratorConfig (validated, immutable)
//!     → injected into forwarder and health probe at construction
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Request handling never reads the environment directly

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, load_layered, ConfigError};
pub use schema::{
    DownstreamConfig, ListenerConfig, LogFormat, ObservabilityConfig, OrchestratorConfig,
    ServiceConfig,
};
pub use validation::ValidationError;
