//! Diagnostic tracing for the `oldest` binary.
//!
//! Logs go to stderr and are controlled by `RUST_LOG`. The result line on
//! stdout is never affected by the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// Build the filter from `RUST_LOG`-style directives.
///
/// Missing or invalid directives fall back to [`DEFAULT_DIRECTIVES`].
pub fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// # Example
/// ```bash
/// RUST_LOG=oldest=debug oldest < ages.txt
/// ```
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        .with(filter(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
