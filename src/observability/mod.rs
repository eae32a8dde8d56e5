//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! forwarder / health probe produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, text or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID (`x-request-id`) is attached by the HTTP layer and flows into trace spans
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
