//! Health reporting subsystem.
//!
//! # Data Flow
//! ```text
//! GET /health
//!     → probe.rs (bounded GET against the downstream health URL)
//!     → HealthReport { status: "healthy", n8n_reachable, ... }
//!     → always HTTP 200
//! ```
//!
//! # Design Decisions
//! - The endpoint reports orchestrator health; downstream reachability is a field
//! - Stateless: every request probes afresh, nothing is cached between calls

pub mod probe;

pub use probe::{HealthProbe, HealthReport};
