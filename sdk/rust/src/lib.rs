pub mod client;

pub use client::{ExecuteReply, HealthReply, OrchestratorClient};
