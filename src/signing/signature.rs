//! Internal signature generation.
//!
//! The digest is HMAC-SHA256 keyed by the shared secret over an empty
//! message, the same value the auth service derives from its own copy of the
//! secret. Nothing request-specific goes in, so the value is constant for the
//! lifetime of the process. The timestamp travels alongside but is not signed.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex encoded HMAC-SHA256 digest.
pub const SIGNATURE_HEX_LEN: usize = 64;

/// Errors produced while signing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningError {
    #[error("internal signature secret is not configured")]
    MissingSecret,
    /// HMAC accepts keys of any length, so this is not expected in practice;
    /// it carries the `new_from_slice` error instead of unwrapping it.
    #[error("internal signature secret rejected as HMAC key")]
    InvalidKey,
}

/// Hex encoded digest sent as `X-Internal-Signature`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the internal signature for `secret`.
///
/// Fails with [`SigningError::MissingSecret`] for an empty secret.
pub fn sign(secret: &str) -> Result<Signature, SigningError> {
    if secret.is_empty() {
        return Err(SigningError::MissingSecret);
    }

    let mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| SigningError::InvalidKey)?;

    Ok(Signature(hex::encode(mac.finalize().into_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_secret() {
        let a = sign("gateway-secret").unwrap();
        let b = sign("gateway-secret").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lowercase_hex_of_digest_length() {
        let sig = sign("gateway-secret").unwrap();
        assert_eq!(sig.as_str().len(), SIGNATURE_HEX_LEN);
        assert!(sig
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn keyed_by_secret_over_empty_message() {
        let mac = HmacSha256::new_from_slice(b"gateway-secret").unwrap();
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(sign("gateway-secret").unwrap().into_string(), expected);
    }

    #[test]
    fn matches_auth_service_digest() {
        assert_eq!(
            sign("s").unwrap().as_str(),
            "64eca07cce67929c357d63d0a4aec207e774800403298914fc04e88ce02ac49f"
        );
        assert_eq!(
            sign("gateway-secret").unwrap().as_str(),
            "611b826a515eec78e0c0f1196c56478464cd8aa7be93e1454763ff0685a51984"
        );
    }

    #[test]
    fn different_secrets_differ() {
        assert_ne!(sign("one").unwrap(), sign("two").unwrap());
    }

    #[test]
    fn empty_secret_rejected() {
        assert_eq!(sign(""), Err(SigningError::MissingSecret));
    }
}
