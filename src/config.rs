//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is made. A `.env` file in the working directory is honoured (loaded by
//! `main.rs` via `dotenvy`).
//!
//! ## Variables
//!
//! - `SHORTENER_API_URL` - Base address of the shortening service
//!   (default: `http://127.0.0.1:8000`)
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! The `--api-url` command line flag takes priority over `SHORTENER_API_URL`.

use anyhow::{Context, Result};
use std::env;

use crate::utils::base_url::{mask_credentials, parse_base_url};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = env::var("SHORTENER_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            api_base_url,
            log_level,
            log_format,
        }
    }

    /// Replaces the API address when one was given explicitly.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        parse_base_url(&self.api_base_url).with_context(|| {
            format!(
                "SHORTENER_API_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            )
        })?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs a configuration summary (without credentials).
    pub fn print_summary(&self) {
        let api = parse_base_url(&self.api_base_url)
            .map(|url| mask_credentials(&url))
            .unwrap_or_else(|_| self.api_base_url.clone());

        tracing::debug!("Configuration loaded:");
        tracing::debug!("  API: {}", api);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(api_url: Option<String>) -> Result<Config> {
    let config = Config::from_env().with_api_url(api_url);
    config.validate()?;
    Ok(config)
}
