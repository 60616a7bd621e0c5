//! Signing stage.
//!
//! Runs for every inbound request before routing reaches the proxy. The
//! request is consumed and handed on with fresh trust headers attached, or
//! answered with 500 when no secret is configured. In the second case nothing
//! is sent to the backend.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::SigningConfig;
use crate::http::response::GatewayError;
use crate::signing::TrustHeaders;

pub async fn sign_request(
    State(signing): State<Arc<SigningConfig>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match TrustHeaders::issue(signing.secret()) {
        Ok(trust) => next.run(trust.attach(request)).await,
        Err(e) => {
            tracing::error!(
                method = %request.method(),
                path = %request.uri().path(),
                error = %e,
                "Rejecting request before forwarding"
            );
            GatewayError::from(e).into_response()
        }
    }
}
