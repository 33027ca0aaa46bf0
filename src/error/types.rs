//! Error types
//!
//! Defines the error types for each layer of the client.

use std::fmt;
use std::io;

/// Failures of a single exchange with the users API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A response arrived with a non-2xx status.
    Application {
        status: u16,
        message: Option<String>,
    },
    /// The exchange never produced a usable response.
    Transport(String),
}

impl ApiError {
    /// Server-provided message, if the response carried a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Application {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Application {
                status,
                message: Some(message),
            } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Application {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Transport(reason) => write!(f, "Transport error: {}", reason),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

/// Form state errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The field does not belong to the form that received it.
    UnknownField { form: &'static str, field: String },
    PasswordMismatch,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField { form, field } => {
                write!(f, "Field '{}' is not part of the {} form", field, form)
            }
            FormError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for FormError {}

/// Top-level error for the client binary
#[derive(Debug)]
pub enum ClientError {
    Config(config::ConfigError),
    HttpSetup(reqwest::Error),
    IoError(io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Config(e) => write!(f, "Configuration error: {}", e),
            ClientError::HttpSetup(e) => write!(f, "HTTP client setup failed: {}", e),
            ClientError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<config::ConfigError> for ClientError {
    fn from(error: config::ConfigError) -> Self {
        ClientError::Config(error)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::HttpSetup(error)
    }
}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        ClientError::IoError(error)
    }
}
