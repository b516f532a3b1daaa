//! HTTP API layer for Cargo Payments.
//!
//! Provides the payment record endpoint and a health check.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
