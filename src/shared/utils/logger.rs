use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger(default_level: log::LevelFilter) {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(default_level) // Default level
            .filter_module("marquee_lib", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log search operations
    pub fn search_operation(query: &str, filter: Option<&str>, results: Option<usize>) {
        match (filter, results) {
            (Some(f), Some(r)) => info!("Search: '{}' as {} returned {} results", query, f, r),
            (Some(f), None) => debug!("Search: Starting '{}' as {}", query, f),
            (None, Some(r)) => info!("Search: '{}' returned {} results", query, r),
            (None, None) => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log a business rejection (not a fault)
    pub fn rejected(operation: &str, reason: &str) {
        warn!("{}: rejected ({})", operation, reason);
    }

    /// Log a committed write
    pub fn committed(operation: &str, details: &str) {
        info!("{}: committed {}", operation, details);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
