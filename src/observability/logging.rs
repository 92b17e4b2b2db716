//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Human-readable fmt output on stdout
//! - `RUST_LOG` overrides the configured level, except for the
//!   disconnection line, which stays at `info` under any filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target of the per-session disconnection line.
pub const DISCONNECT_TARGET: &str = "echo_websocket::disconnect";

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(log_level: &str) -> String {
    format!(
        "echo_websocket={},tower_http=info",
        log_level.to_ascii_lowercase()
    )
}

/// Add the directive that keeps the disconnection line visible.
pub fn with_disconnect_line(filter: EnvFilter) -> EnvFilter {
    match format!("{}=info", DISCONNECT_TARGET).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global tracing subscriber.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(log_level).into());

    tracing_subscriber::registry()
        .with(with_disconnect_line(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();
}
