//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Forwarding handler
//!     → hooks.rs (on_forward / on_response / on_error)
//!         → logging.rs (structured log events)
//!         → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the inbound request to the backend and back
//! - Hooks are observe-only and cannot influence the response

pub mod hooks;
pub mod logging;
pub mod metrics;

pub use hooks::{ForwardContext, ProxyHooks, TelemetryHooks};
