//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the backend target is a usable plain-HTTP origin
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - A missing shared secret is not an error here; requests fail with 500 instead

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("upstream.base_url is required")]
    MissingBaseUrl,
    #[error("upstream.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),
    #[error("upstream.base_url must use http, got {0}")]
    UnsupportedScheme(String),
    #[error("upstream.base_url must not carry a query or fragment")]
    BaseUrlHasQuery,
    #[error("listener.bind_address is not a socket address: {0}")]
    InvalidBindAddress(String),
    #[error("observability.metrics_address is not a socket address: {0}")]
    InvalidMetricsAddress(String),
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = parse_base_url(&config.upstream.base_url) {
        errors.push(e);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }
    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.request_timeout_secs"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse and check the backend base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingBaseUrl);
    }

    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidBaseUrl(e.to_string()))?;

    if url.scheme() != "http" {
        return Err(ValidationError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.host_str().is_none() {
        return Err(ValidationError::InvalidBaseUrl(format!("{raw} has no host")));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ValidationError::BaseUrlHasQuery);
    }

    Ok(url)
}
