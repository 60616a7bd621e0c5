//! Middleware applied in front of the forwarding handler.

pub mod signing;

pub use signing::sign_request;
