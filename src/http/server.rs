//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the single mount point
//! - Wire up middleware (request ID, tracing, signing)
//! - Build the pooled backend client
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, middleware, routing::any, Router};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::validation::{parse_base_url, ValidationError};
use crate::config::{GatewayConfig, SigningConfig};
use crate::http::middleware::sign_request;
use crate::http::proxy::{forward, ProxyState};
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::upstream::{Upstream, MOUNT_PATH};
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::{ProxyHooks, TelemetryHooks};

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a server reporting through [`TelemetryHooks`].
    pub fn new(config: GatewayConfig) -> Result<Self, ValidationError> {
        Self::with_hooks(config, Arc::new(TelemetryHooks))
    }

    /// Create a server with custom lifecycle hooks.
    pub fn with_hooks(
        config: GatewayConfig,
        hooks: Arc<dyn ProxyHooks>,
    ) -> Result<Self, ValidationError> {
        let base_url = parse_base_url(&config.upstream.base_url)?;
        let upstream = Arc::new(Upstream::from_url(&base_url)?);

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(
            config.upstream.connect_timeout_secs,
        )));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        let state = ProxyState {
            upstream,
            client,
            hooks,
            request_timeout: Duration::from_secs(config.upstream.request_timeout_secs),
        };

        let router = build_router(state, Arc::new(config.signing.clone()));
        Ok(Self { router, config })
    }

    /// Run the server until a signal arrives or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the gateway without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// The signing layer wraps every route and the fallback, so a missing secret
/// rejects all traffic.
pub fn build_router(state: ProxyState, signing: Arc<SigningConfig>) -> Router {
    Router::new()
        .route(MOUNT_PATH, any(forward))
        .route(&format!("{MOUNT_PATH}/"), any(forward))
        .route(&format!("{MOUNT_PATH}/{{*rest}}"), any(forward))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .with_state(state)
        .layer(middleware::from_fn_with_state(signing, sign_request))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
}
