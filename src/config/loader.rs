//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Port to listen on; binds all interfaces.
pub const ENV_PORT: &str = "PORT";
/// Shared secret for the internal signature.
pub const ENV_INTERNAL_SIGNATURE: &str = "INTERNAL_SIGNATURE";
/// Base URL of the auth service.
pub const ENV_AUTH_SERVICE_URL: &str = "AUTH_SERVICE_DEV_URL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: optional TOML file, then environment overrides, then validation.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => GatewayConfig::default(),
    };

    let config = apply_env_overrides(config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay the deployment environment variables on top of `config`.
///
/// `lookup` abstracts the environment so callers (and tests) can supply their own.
pub fn apply_env_overrides<F>(mut config: GatewayConfig, lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(ENV_PORT) {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            name: ENV_PORT,
            value: port.clone(),
        })?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    if let Some(secret) = lookup(ENV_INTERNAL_SIGNATURE) {
        config.signing.internal_signature = Some(secret);
    }

    if let Some(url) = lookup(ENV_AUTH_SERVICE_URL) {
        config.upstream.base_url = url;
    }

    Ok(config)
}
