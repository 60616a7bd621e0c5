//! Client-facing error contract.
//!
//! # Responsibilities
//! - Define the gateway's error taxonomy
//! - Map each error to its fixed status code and JSON body
//!
//! # Design Decisions
//! - Backend 4xx/5xx responses are not errors; they never reach this module
//! - Every transport failure collapses to the same 502 body
//! - Signing failures expose nothing beyond a generic 500

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::signing::SigningError;

/// Name reported in the `service` field of the 502 body.
pub const SERVICE_NAME: &str = "auth";

/// Message reported when the backend cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "Auth service is currently unavailable";

/// Message reported when the request cannot be signed.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors the gateway answers itself instead of relaying a backend response.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),
    #[error("upstream did not respond within {0:?}")]
    UpstreamTimeout(Duration),
    #[error("failed to build upstream request: {0}")]
    InvalidRequest(#[from] axum::http::Error),
}

impl GatewayError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Upstream(_)
            | GatewayError::UpstreamTimeout(_)
            | GatewayError::InvalidRequest(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Signing(_) => "signing",
            GatewayError::Upstream(e) if e.is_connect() => "connect",
            GatewayError::Upstream(_) => "transport",
            GatewayError::UpstreamTimeout(_) => "timeout",
            GatewayError::InvalidRequest(_) => "request",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Signing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalErrorBody::default()),
            )
                .into_response(),
            _ => (StatusCode::BAD_GATEWAY, Json(UnavailableBody::now())).into_response(),
        }
    }
}

/// Body of the 500 sent when no signature can be produced.
#[derive(Debug, Clone, Serialize)]
pub struct InternalErrorBody {
    pub message: &'static str,
}

impl Default for InternalErrorBody {
    fn default() -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE,
        }
    }
}

/// Body of the 502 sent when the backend is unreachable.
#[derive(Debug, Clone, Serialize)]
pub struct UnavailableBody {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

impl UnavailableBody {
    pub fn now() -> Self {
        Self {
            status: "error",
            message: UNAVAILABLE_MESSAGE,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            service: SERVICE_NAME,
        }
    }
}
