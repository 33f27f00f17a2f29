//! Shared logging utilities for consistent tracing across a run

use crate::types::RunId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the `EnvFilter` directive string for the workspace crates
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("grouper={base_level},shared={base_level}")
}

/// Initialize tracing subscriber with an optional log level (defaults to info)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let directive = filter_directive(log_level);

    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Initialize tracing at info level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for run-aware info logging
#[macro_export]
macro_rules! run_info {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::info!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for run-aware warning logging
#[macro_export]
macro_rules! run_warn {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for run-aware error logging
#[macro_export]
macro_rules! run_error {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::error!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for run-aware debug logging
#[macro_export]
macro_rules! run_debug {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(run_id: &RunId, details: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(run_id: &RunId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        run = %run_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(run_id: &RunId, message: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(run_id: &RunId, action: &str, details: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_levels() {
        assert_eq!(filter_directive(None), "grouper=info,shared=info");
        assert_eq!(filter_directive(Some("debug")), "grouper=debug,shared=debug");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing_with_level(Some("debug"));
        init_tracing();
    }
}
