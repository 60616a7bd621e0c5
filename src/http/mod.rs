//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span)
//!     → middleware/signing.rs (attach trust headers or answer 500)
//!     → proxy.rs (forward to the auth service)
//!         → upstream.rs (path rewrite, Host rewrite)
//!     → response.rs (502 contract on transport failure)
//!     → Send to client
//! ```

pub mod middleware;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;
pub mod upstream;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::GatewayError;
pub use server::HttpServer;
pub use upstream::{Upstream, BACKEND_ROOT, MOUNT_PATH};
