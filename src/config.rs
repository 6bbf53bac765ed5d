//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Base URLs
//!
//! ```bash
//! export FRONTEND_BASE_URL="https://wishlist.example.com"
//! export BACKEND_BASE_URL="http://backend:8080"
//! ```
//!
//! The `REACT_APP_FRONTEND_BASE_URL` / `REACT_APP_BACKEND_BASE_URL` names used
//! by older deployments are read when the unprefixed variables are not set.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `FRONTEND_BASE_URL` - Where the pages are served (default: `http://localhost:3000`)
//! - `BACKEND_BASE_URL` - Backend service of record (default: `http://localhost:8080`)
//! - `BACKEND_TIMEOUT_SECS` - Timeout for each backend request (default: 10)
//! - `CLICK_RETRY_DELAY_MS` - Pause before the single click tracking retry (default: 100)
//! - `RATE_LIMIT_BURST` - API requests allowed per window per client IP (default: 100)
//! - `RATE_LIMIT_WINDOW_SECS` - Rate limit window (default: 900)
//! - `STATIC_DIR` - Static asset directory (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_FRONTEND_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:8080";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL of the pages; login emails link to `<this>/user-profile/`.
    pub frontend_base_url: String,
    pub backend_base_url: String,
    pub backend_timeout_secs: u64,
    pub click_retry_delay_ms: u64,
    pub rate_limit_burst: u32,
    pub rate_limit_window_secs: u64,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let frontend_base_url =
            load_base_url("FRONTEND_BASE_URL", "REACT_APP_FRONTEND_BASE_URL", DEFAULT_FRONTEND_BASE_URL);
        let backend_base_url =
            load_base_url("BACKEND_BASE_URL", "REACT_APP_BACKEND_BASE_URL", DEFAULT_BACKEND_BASE_URL);

        let backend_timeout_secs = parse_or("BACKEND_TIMEOUT_SECS", 10);
        let click_retry_delay_ms = parse_or("CLICK_RETRY_DELAY_MS", 100);
        let rate_limit_burst = parse_or("RATE_LIMIT_BURST", 100);
        let rate_limit_window_secs = parse_or("RATE_LIMIT_WINDOW_SECS", 900);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            frontend_base_url,
            backend_base_url,
            backend_timeout_secs,
            click_retry_delay_ms,
            rate_limit_burst,
            rate_limit_window_secs,
            static_dir,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either base URL is not an absolute `http`/`https` URL
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - `backend_timeout_secs` is 0
    /// - `rate_limit_burst` is outside 1..=10000 or the window is 0
    pub fn validate(&self) -> Result<()> {
        validate_http_url("FRONTEND_BASE_URL", &self.frontend_base_url)?;
        validate_http_url("BACKEND_BASE_URL", &self.backend_base_url)?;

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.backend_timeout_secs == 0 {
            anyhow::bail!("BACKEND_TIMEOUT_SECS must be greater than 0");
        }

        if self.rate_limit_burst == 0 || self.rate_limit_burst > 10_000 {
            anyhow::bail!(
                "RATE_LIMIT_BURST must be between 1 and 10000, got {}",
                self.rate_limit_burst
            );
        }

        if self.rate_limit_window_secs == 0 {
            anyhow::bail!("RATE_LIMIT_WINDOW_SECS must be greater than 0");
        }

        Ok(())
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }

    pub fn click_retry_delay(&self) -> Duration {
        Duration::from_millis(self.click_retry_delay_ms)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    /// Origin (`scheme://host[:port]`) of the frontend, used for CORS.
    ///
    /// # Errors
    ///
    /// Returns an error if `frontend_base_url` does not parse.
    pub fn frontend_origin(&self) -> Result<String> {
        let url = Url::parse(&self.frontend_base_url)
            .with_context(|| format!("Invalid FRONTEND_BASE_URL '{}'", self.frontend_base_url))?;
        Ok(url.origin().ascii_serialization())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Frontend: {}", self.frontend_base_url);
        tracing::info!("  Backend: {}", self.backend_base_url);
        tracing::info!("  Backend timeout: {}s", self.backend_timeout_secs);
        tracing::info!("  Click retry delay: {}ms", self.click_retry_delay_ms);
        tracing::info!(
            "  Rate limit: {} requests / {}s",
            self.rate_limit_burst,
            self.rate_limit_window_secs
        );
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a base URL, preferring `primary` over `legacy`, and strips any trailing slash.
fn load_base_url(primary: &str, legacy: &str, default: &str) -> String {
    env::var(primary)
        .or_else(|_| env::var(legacy))
        .unwrap_or_else(|_| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
    }

    if url.host_str().is_none() {
        anyhow::bail!("{name} must include a host, got '{value}'");
    }

    Ok(())
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
            listen_addr: "0.0.0.0:3000".to_string(),
            frontend_base_url: "http://localhost:3000".to_string(),
            backend_base_url: "http://backend:8080".to_string(),
            backend_timeout_secs: 10,
            click_retry_delay_ms: 100,
            rate_limit_burst: 100,
            rate_limit_window_secs: 900,
            static_dir: "static".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.backend_base_url = "ftp://backend".to_string();
        assert!(config.validate().is_err());

        config.backend_base_url = "backend:8080".to_string();
        assert!(config.validate().is_err());

        config.backend_base_url = "http://backend:8080".to_string();

        config.frontend_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_numeric_limits() {
        let mut config = valid_config();

        config.backend_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.backend_timeout_secs = 10;

        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());
        config.rate_limit_burst = 10_001;
        assert!(config.validate().is_err());
        config.rate_limit_burst = 100;

        config.rate_limit_window_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frontend_origin_drops_path() {
        let mut config = valid_config();
        config.frontend_base_url = "https://wishlist.example.com/app".to_string();

        assert_eq!(
            config.frontend_origin().unwrap(),
            "https://wishlist.example.com"
        );
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for key in [
                "LISTEN",
                "FRONTEND_BASE_URL",
                "REACT_APP_FRONTEND_BASE_URL",
                "BACKEND_BASE_URL",
                "REACT_APP_BACKEND_BASE_URL",
                "BACKEND_TIMEOUT_SECS",
                "CLICK_RETRY_DELAY_MS",
                "RATE_LIMIT_BURST",
                "RATE_LIMIT_WINDOW_SECS",
            ] {
                env::remove_var(key);
            }
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.frontend_base_url, "http://localhost:3000");
        assert_eq!(config.backend_base_url, "http://localhost:8080");
        assert_eq!(config.backend_timeout(), Duration::from_secs(10));
        assert_eq!(config.click_retry_delay(), Duration::from_millis(100));
        assert_eq!(config.rate_limit_burst, 100);
        assert_eq!(config.rate_limit_window(), Duration::from_secs(900));
    }

    #[test]
    #[serial]
    fn test_legacy_base_url_names() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("FRONTEND_BASE_URL");
            env::remove_var("BACKEND_BASE_URL");
            env::set_var("REACT_APP_FRONTEND_BASE_URL", "https://wishlist.example.com/");
            env::set_var("REACT_APP_BACKEND_BASE_URL", "http://backend:8080");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.frontend_base_url, "https://wishlist.example.com");
        assert_eq!(config.backend_base_url, "http://backend:8080");

        // Cleanup
        unsafe {
            env::remove_var("REACT_APP_FRONTEND_BASE_URL");
            env::remove_var("REACT_APP_BACKEND_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_primary_name_takes_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BACKEND_BASE_URL", "http://from-primary:8080");
            env::set_var("REACT_APP_BACKEND_BASE_URL", "http://from-legacy:8080");
        }

        let config = Config::from_env().unwrap();

        assert!(config.backend_base_url.contains("from-primary"));
        assert!(!config.backend_base_url.contains("from-legacy"));

        // Cleanup
        unsafe {
            env::remove_var("BACKEND_BASE_URL");
            env::remove_var("REACT_APP_BACKEND_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_number_falls_back() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BACKEND_TIMEOUT_SECS", "soon");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.backend_timeout_secs, 10);

        unsafe {
            env::remove_var("BACKEND_TIMEOUT_SECS");
        }
    }
}
