//! Logging utilities
//!
//! Provides logging setup and the log lines shared by the controllers.

use log::{debug, error};

use crate::error::ApiError;

/// Setup logging for the client (`RUST_LOG` picks the level)
pub fn setup_logging() {
    env_logger::init();
}

/// Log an outgoing API call
pub fn log_request(method: &str, path: &str) {
    debug!("{} {}", method, path);
}

/// Log a failed exchange under the action's context label
pub fn log_api_failure(context: &str, err: &ApiError) {
    error!("{}: {}", context, err);
}
