//! Outbound HTTP client shared by the forwarder and the health probe.

use reqwest::Client;

use crate::config::DownstreamConfig;

const USER_AGENT: &str = concat!("orchestrator/", env!("CARGO_PKG_VERSION"));

/// Build the pooled client used for every downstream call.
///
/// Per-call deadlines are applied on each request; only the connect bound
/// lives on the client.
pub fn build_client(config: &DownstreamConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(config.connect_timeout())
        .no_proxy()
        .build()
}
