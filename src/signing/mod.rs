//! Internal request signing.
//!
//! # Data Flow
//! ```text
//! shared secret (GatewayConfig.signing)
//!     → signature.rs (HMAC-SHA256, hex)
//!     → trust.rs (signature + millisecond timestamp)
//!     → attached to the inbound request before it reaches the proxy
//! ```
//!
//! # Design Decisions
//! - Computed once per request, never cached
//! - Pure: no I/O, no shared state, safe under any concurrency

pub mod signature;
pub mod trust;

pub use signature::{sign, Signature, SigningError, SIGNATURE_HEX_LEN};
pub use trust::{TrustHeaders, X_INTERNAL_SIGNATURE, X_INTERNAL_TIMESTAMP};
