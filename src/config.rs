//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is made. A `.env` file in the working directory is honored (loaded by
//! `dotenvy` in `main.rs`).
//!
//! ```bash
//! export API_BASE_URL="https://s.example.com"
//! ```
//!
//! ## Required Variables
//!
//! - `API_BASE_URL` - Base URL of the shortening service. Also the prefix of
//!   every displayed short link (`{API_BASE_URL}/{path}`).
//!
//! ## Optional Variables
//!
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout (default: 10, range: 1-300)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::utils::url_validator::is_valid_http_url;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is not set.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_base_url,
            http_timeout_seconds,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an absolute http(s) URL
    /// - `http_timeout_seconds` is outside 1-300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !is_valid_http_url(&self.api_base_url) {
            anyhow::bail!(
                "API_BASE_URL must be an absolute http(s) URL, got '{}'",
                self.api_base_url
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Parsed form of `api_base_url`.
    pub fn api_base(&self) -> Result<Url> {
        Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid API_BASE_URL '{}'", self.api_base_url))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base URL: {}", self.api_base_url);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            api_base_url: "https://s.example.com".to_string(),
            http_timeout_seconds: 10,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            env::remove_var("API_BASE_URL");
            env::remove_var("HTTP_TIMEOUT_SECONDS");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.api_base_url = "s.example.com".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "ftp://s.example.com".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "http://localhost:3000".to_string();
        assert!(config.validate().is_ok());

        config.http_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.http_timeout_seconds = 301;
        assert!(config.validate().is_err());

        config.http_timeout_seconds = 300;
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_base_and_timeout() {
        let config = valid_config();
        assert_eq!(config.api_base().unwrap().host_str(), Some("s.example.com"));
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_from_env_requires_base_url() {
        clear_env();

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API_BASE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("API_BASE_URL", "https://s.example.com");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "https://s.example.com");
        assert_eq!(config.http_timeout_seconds, 10);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, "text");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("API_BASE_URL", "http://localhost:8080");
            env::set_var("HTTP_TIMEOUT_SECONDS", "3");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.http_timeout_seconds, 3);
        assert_eq!(config.log_format, "json");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid_base() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("API_BASE_URL", "not a url");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_timeout_falls_back_to_default() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("API_BASE_URL", "https://s.example.com");
            env::set_var("HTTP_TIMEOUT_SECONDS", "soon");
        }

        assert_eq!(Config::from_env().unwrap().http_timeout_seconds, 10);

        clear_env();
    }
}
