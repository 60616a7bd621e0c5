//! Trust headers attached to every forwarded request.

use axum::http::{HeaderName, HeaderValue, Request};

use crate::signing::signature::{sign, Signature, SigningError};

/// Header carrying the internal signature.
pub const X_INTERNAL_SIGNATURE: HeaderName = HeaderName::from_static("x-internal-signature");
/// Header carrying the signing time in milliseconds since the Unix epoch.
pub const X_INTERNAL_TIMESTAMP: HeaderName = HeaderName::from_static("x-internal-timestamp");

/// The `(signature, timestamp)` pair for one request.
///
/// Issued fresh for every request and consumed when attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustHeaders {
    signature: Signature,
    timestamp: String,
}

impl TrustHeaders {
    /// Issue headers for a request being processed now.
    pub fn issue(secret: Option<&str>) -> Result<Self, SigningError> {
        Self::issue_at(secret, chrono::Utc::now().timestamp_millis())
    }

    /// Issue headers for a request processed at `timestamp_ms`.
    pub fn issue_at(secret: Option<&str>, timestamp_ms: i64) -> Result<Self, SigningError> {
        let secret = secret.ok_or(SigningError::MissingSecret)?;
        Ok(Self {
            signature: sign(secret)?,
            timestamp: timestamp_ms.to_string(),
        })
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Consume the inbound request and return it carrying both trust headers.
    ///
    /// Any client-supplied values for these headers are replaced.
    pub fn attach<B>(self, request: Request<B>) -> Request<B> {
        let (mut parts, body) = request.into_parts();

        // Hex digits and decimal digits are always valid header bytes.
        if let Ok(value) = HeaderValue::from_str(self.signature.as_str()) {
            parts.headers.insert(X_INTERNAL_SIGNATURE, value);
        }
        if let Ok(value) = HeaderValue::from_str(&self.timestamp) {
            parts.headers.insert(X_INTERNAL_TIMESTAMP, value);
        }

        Request::from_parts(parts, body)
    }
}
