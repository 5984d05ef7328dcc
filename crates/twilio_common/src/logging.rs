//! Logging setup for the twilio-rs binaries and tests.
//!
//! Libraries only emit `tracing` events; installing a subscriber is left to the
//! binary (or a test) through [`init`] / [`init_with_level`].

use tracing::{info, Level};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Crate targets that get the requested level even when `RUST_LOG` is unset.
const WORKSPACE_TARGETS: [&str; 5] = [
    "twilio_backend",
    "twilio_common",
    "twilio_jwt",
    "twilio_rest",
    "twilio_token_service",
];

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use twilio_common::logging;
///
/// logging::init();
/// // Later calls are no-ops.
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured; the workspace crates additionally get `level`.
/// A subscriber that is already installed is left alone.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in WORKSPACE_TARGETS {
        if let Ok(directive) = format!("{}={}", target, level).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_level(Level::DEBUG);
    }
}
