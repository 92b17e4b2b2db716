//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the upgrade handler on every path
//! - Wire up middleware (tracing)
//! - Serve on a listener until shutdown, then drain sessions

use axum::{routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, EchoConfig, MessageConfig};
use crate::http::websocket::upgrade_handler;
use crate::net::ConnectionTracker;

/// Error type for server startup and operation.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<MessageConfig>,
    pub tracker: ConnectionTracker,
    /// Flips to `true` once the server stops. Sessions that start after
    /// the flip still observe it.
    pub closing: watch::Receiver<bool>,
}

/// WebSocket echo server.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
    state: AppState,
    closing: Arc<watch::Sender<bool>>,
}

impl EchoServer {
    /// Create a new server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let (closing_tx, closing_rx) = watch::channel(false);
        let state = AppState {
            messages: Arc::new(config.messages.clone()),
            tracker: ConnectionTracker::new(),
            closing: closing_rx,
        };

        let router = Self::build_router(state.clone());
        Self {
            router,
            config,
            state,
            closing: Arc::new(closing_tx),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(upgrade_handler))
            .route("/", any(upgrade_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires, then wait for open sessions.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Echo server listening");

        let closing = Arc::clone(&self.closing);
        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Stopping listener, closing sessions");
                closing.send_replace(true);
            })
            .await?;

        let drain_timeout = Duration::from_secs(self.config.shutdown.drain_timeout_secs);
        if !self.state.tracker.wait_for_drain(drain_timeout).await {
            tracing::warn!(
                remaining = self.state.tracker.active_count(),
                "Drain timeout elapsed with sessions still open"
            );
        }

        tracing::info!("Echo server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Live session tracker, shared with every session.
    pub fn tracker(&self) -> ConnectionTracker {
        self.state.tracker.clone()
    }
}
