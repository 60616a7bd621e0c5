//! Proxy lifecycle hooks.
//!
//! The forwarding handler calls these synchronously at three points:
//! before the request leaves, after a backend response arrives, and on a
//! transport failure. Hooks only observe; they receive shared references and
//! return nothing, so they cannot change what the client gets.

use std::time::Instant;

use axum::http::{Method, Request, StatusCode, Uri};

use crate::http::request::X_REQUEST_ID;
use crate::http::response::GatewayError;
use crate::observability::metrics;

/// What the hooks know about the request being proxied.
#[derive(Debug, Clone)]
pub struct ForwardContext {
    pub request_id: String,
    pub method: Method,
    pub path: String,
    pub target: Option<Uri>,
    pub started: Instant,
}

impl ForwardContext {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        Self {
            request_id,
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            target: None,
            started: Instant::now(),
        }
    }
}

/// Extension points around a forwarded request.
pub trait ProxyHooks: Send + Sync {
    /// The outbound request is about to be sent.
    fn on_forward(&self, _ctx: &ForwardContext) {}

    /// The backend answered; its response is relayed unchanged.
    fn on_response(&self, _ctx: &ForwardContext, _status: StatusCode) {}

    /// The backend could not be reached; a 502 is being synthesized.
    fn on_error(&self, _ctx: &ForwardContext, _error: &GatewayError) {}
}

/// Default hooks: structured logs plus request metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryHooks;

impl ProxyHooks for TelemetryHooks {
    fn on_forward(&self, ctx: &ForwardContext) {
        tracing::debug!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            target = ?ctx.target,
            "Forwarding request to auth service"
        );
    }

    fn on_response(&self, ctx: &ForwardContext, status: StatusCode) {
        tracing::info!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            status = status.as_u16(),
            elapsed_ms = ctx.started.elapsed().as_millis() as u64,
            "Auth service responded"
        );
        metrics::record_request(ctx.method.as_str(), status.as_u16(), ctx.started);
    }

    fn on_error(&self, ctx: &ForwardContext, error: &GatewayError) {
        tracing::error!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            path = %ctx.path,
            error = %error,
            "Auth service unavailable"
        );
        metrics::record_upstream_error(error.kind());
        metrics::record_request(ctx.method.as_str(), error.status().as_u16(), ctx.started);
    }
}
