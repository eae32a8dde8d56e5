//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, body limit, request ID)
//! - Build the shared downstream client, forwarder and health probe
//! - Bind server to listener and drain on shutdown

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::OrchestratorConfig;
use crate::error::OrchestratorError;
use crate::forwarding::{build_client, RequestForwarder};
use crate::health::HealthProbe;
use crate::http::handlers::{execute, health, index};
use crate::http::request::{make_span, UuidRequestId};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<RequestForwarder>,
    pub probe: Arc<HealthProbe>,
    pub service_name: Arc<str>,
}

impl AppState {
    /// Wire the forwarder and probe from configuration. Both share one client.
    pub fn from_config(config: &OrchestratorConfig) -> Result<Self, OrchestratorError> {
        let client = build_client(&config.downstream)?;
        let forwarder = RequestForwarder::new(client.clone(), &config.downstream)?;
        let probe = HealthProbe::new(client, &config.downstream, &config.service)?;

        Ok(Self {
            forwarder: Arc::new(forwarder),
            probe: Arc::new(probe),
            service_name: Arc::from(config.service.name.as_str()),
        })
    }
}

/// HTTP server for the orchestrator.
pub struct HttpServer {
    router: Router,
    config: OrchestratorConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: OrchestratorConfig) -> Result<Self, OrchestratorError> {
        let state = AppState::from_config(&config)?;
        let router = build_router(state, config.listener.max_body_size);

        tracing::info!(
            webhook_url = %config.downstream.webhook_url,
            health_url = %config.downstream.health_url,
            request_timeout_secs = config.downstream.request_timeout_secs,
            health_timeout_secs = config.downstream.health_timeout_secs,
            "Downstream configured"
        );

        Ok(Self { router, config })
    }

    /// Router with all middleware, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState, max_body_size: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/execute", post(execute))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
