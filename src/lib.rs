//! API gateway in front of the internal auth service.
//!
//! Every request under `/api/v1/auth` is stamped with an internal signature
//! and timestamp, rewritten onto the auth service's root, and forwarded. The
//! backend's answer is relayed unchanged; if the backend cannot be reached the
//! client gets a fixed 502 JSON body.
//!
//! ```text
//!  client ──▶ request id ─▶ trace ─▶ signing ─▶ proxy ──▶ auth service
//!         ◀──────────────────────────────────── relay / 502
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod signing;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
