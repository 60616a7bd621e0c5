//! The auth service backend target and outbound request rewriting.
//!
//! # Responsibilities
//! - Hold the parsed backend origin (scheme, authority, optional base path)
//! - Rewrite inbound paths onto the backend root
//! - Re-point `Host` at the backend (change-origin)
//!
//! # Design Decisions
//! - The rewrite replaces the whole mounted path with a fixed backend root;
//!   it is not a general prefix substitution
//! - Query strings survive the rewrite
//! - Headers and body are moved, never copied or buffered

use axum::body::Body;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::{header, HeaderValue, Request, Uri, Version};
use url::Url;

use crate::config::validation::ValidationError;

/// Public mount point of the gateway.
pub const MOUNT_PATH: &str = "/api/v1/auth";

/// Path every forwarded request lands on at the backend.
pub const BACKEND_ROOT: &str = "/api/v1/auth/";

/// The single backend the gateway forwards to.
#[derive(Debug, Clone)]
pub struct Upstream {
    authority: Authority,
    host: HeaderValue,
    base_path: String,
}

impl Upstream {
    /// Build from an already validated base URL.
    pub fn from_url(url: &Url) -> Result<Self, ValidationError> {
        let host = url
            .host_str()
            .ok_or_else(|| ValidationError::InvalidBaseUrl(format!("{url} has no host")))?;
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let host = HeaderValue::from_str(&authority)
            .map_err(|e| ValidationError::InvalidBaseUrl(e.to_string()))?;
        let authority: Authority = authority
            .parse()
            .map_err(|e: axum::http::uri::InvalidUri| ValidationError::InvalidBaseUrl(e.to_string()))?;

        Ok(Self {
            authority,
            host,
            base_path: url.path().trim_end_matches('/').to_string(),
        })
    }

    /// Backend authority, e.g. `auth.internal:9000`.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Outbound URI for an inbound URI.
    pub fn rewrite_uri(&self, inbound: &Uri) -> Result<Uri, axum::http::Error> {
        let path = format!("{}{}", self.base_path, BACKEND_ROOT);
        let path_and_query = match inbound.query() {
            Some(query) => format!("{path}?{query}"),
            None => path,
        };

        Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(self.authority.clone())
            .path_and_query(path_and_query.parse::<PathAndQuery>()?)
            .build()
    }

    /// Turn the signed inbound request into the request sent to the backend.
    ///
    /// Method, headers and body are carried over as-is; only the URI, `Host`
    /// and protocol version change.
    pub fn prepare(&self, request: Request<Body>) -> Result<Request<Body>, axum::http::Error> {
        let (mut parts, body) = request.into_parts();

        parts.uri = self.rewrite_uri(&parts.uri)?;
        parts.version = Version::HTTP_11;
        parts.headers.insert(header::HOST, self.host.clone());

        Ok(Request::from_parts(parts, body))
    }
}
