use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("aniview", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        match result {
            Ok(()) => info!("Logging system initialized"),
            // Host application already installed a logger
            Err(e) => debug!("Logger already set: {}", e),
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log API calls
    pub fn api_call(provider: &str, operation: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, operation, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, operation),
        }
    }

    /// Log a failed repository call without altering the error
    pub fn query_failed(operation: &str, error: &dyn std::error::Error) {
        warn!("Query: {} failed: {}", operation, error);
    }

    /// Log screen state transitions
    pub fn screen_transition(screen: &str, transition: &str) {
        debug!("Screen: {} -> {}", screen, transition);
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

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
