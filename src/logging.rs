//! Logging and tracing setup for Cargo Payments.
//!
//! Raw card numbers must never reach a log line. Events carry masked values
//! only, and HTTP request spans record the path without the query string.

use axum::extract::Request;
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is unset.
pub const DEFAULT_FILTER: &str = "cargo_payments=info,tower_http=info";

/// Initialize the tracing subscriber with JSON formatting.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Span for one HTTP request.
///
/// The query string is left out: payment submissions carry the raw card
/// number there.
pub fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path()
    )
}

/// Initialize tracing for tests (human-readable format, no JSON).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("cargo_payments=debug")
        .try_init();
}
