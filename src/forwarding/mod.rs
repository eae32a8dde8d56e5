//! Webhook forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/execute (JSON)
//!     → forwarder.rs (single bounded POST to the webhook)
//!     → outcome.rs (Success | Timeout | ConnectionFailure | OtherFailure)
//!     → response.rs (pure mapping to status code + JSON body)
//!     → inbound caller
//! ```
//!
//! # Design Decisions
//! - No retries, backoff or circuit breaking
//! - Downstream status codes pass through on success; failures use a fixed taxonomy
//! - Response bodies are decoded JSON-then-text so no bytes are dropped

pub mod client;
pub mod forwarder;
pub mod outcome;
pub mod response;

pub use client::build_client;
pub use forwarder::RequestForwarder;
pub use outcome::{DownstreamBody, DownstreamOutcome};
pub use response::{OutwardPayload, OutwardResponse};
