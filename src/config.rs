//! Configuration management for the Landscape Lab client
//!
//! Built-in defaults, overridden by an optional `config.toml`, overridden by
//! `LANDSCAPE_LAB_*` environment variables.

use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use reqwest::Url;
use serde::Deserialize;

use crate::render::projects::DEFAULT_DATE_FORMAT;
use crate::terminal::OutputStyle;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin serving the `/api/users/*` endpoints.
    /// Environment: LANDSCAPE_LAB_BASE_URL
    pub base_url: String,

    /// Per-request timeout in seconds.
    /// Environment: LANDSCAPE_LAB_REQUEST_TIMEOUT_SECS
    pub request_timeout_secs: u64,

    /// strftime pattern for project creation dates.
    pub date_format: String,

    /// How the terminal prints the project list (`text` or `html`).
    pub output: OutputStyle,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            output: OutputStyle::Text,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the optional config files and the environment
    pub fn load() -> Result<Self, ConfigError> {
        // Packaged layout first, then the working directory
        let builder = Config::builder()
            .add_source(File::with_name("landscape-lab/config").required(false))
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("LANDSCAPE_LAB"));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ClientConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.date_format.is_empty() {
            return Err(ConfigError::Message("date_format cannot be empty".into()));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Message(format!(
                "date_format is not a valid strftime pattern: {}",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Parsed base URL; only http and https are accepted
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Message(format!("invalid base_url '{}': {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::Message(format!(
                "base_url must use http or https, got '{}'",
                other
            ))),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
