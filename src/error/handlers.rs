//! Error handlers
//!
//! Turns errors into the text a user sees.

use crate::error::types::{ApiError, ClientError};
use log::error;

/// Shown for every transport failure, whatever the action.
pub const NETWORK_ERROR_MESSAGE: &str = "网络错误，请稍后重试";

/// Log a fatal client error
pub fn handle_error(err: &ClientError) {
    error!("Client error: {}", err);
}

/// Alert text for a failed API call.
///
/// Application errors show the server's message or the action's fallback;
/// transport errors always show the generic network message.
pub fn user_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
        ApiError::Application { .. } => err
            .server_message()
            .unwrap_or(fallback)
            .to_string(),
    }
}
