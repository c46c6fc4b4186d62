//! JSON log output for the server process.

use tracing_subscriber::{
    filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Pick the event filter: `RUST_LOG` when it is set and parses, otherwise
/// `fallback`.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))
}

/// Install the global subscriber. One flattened JSON object per event.
///
/// Exits the process if neither `RUST_LOG` nor `fallback` is a valid filter,
/// since nothing could be logged about it.
pub fn init_logging(fallback: &str) {
    let filter = build_filter(fallback).unwrap_or_else(|e| {
        eprintln!("FATAL: invalid log filter '{fallback}': {e}");
        std::process::exit(1);
    });

    let json = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(filter).with(json).init();

    tracing::info!(filter = fallback, "Logging initialized");
}

/// Plain output captured by the test harness. Safe to call repeatedly.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("passgate_idp=debug,passgate_auth=debug,passgate_api_auth=debug")
        .try_init();
}
