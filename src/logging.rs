//! Logging utilities for structured tracing

use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the verbosity switch.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("slack_inviter={}", level))),
        )
        .with_target(false)
        .init();

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }
}

/// Track operation timing and log on drop
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Create a new timer for an operation
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration_ms = self.start.elapsed().as_millis() as u64;
        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );
    }
}

/// Log a fatal error with structured context
pub fn log_error(operation: &str, error: &crate::InviterError) {
    let class = if error.is_configuration() {
        "configuration"
    } else {
        "upstream"
    };

    tracing::error!(
        operation = %operation,
        error = %error,
        error_class = class,
        "Operation failed"
    );
}
