//! Configuration module
//!
//! Handles CLI configuration including the backend URL, polling cadence and
//! request timeout.

use anyhow::{Context, Result, bail};
use crewdeck_client::BackendClient;
use crewdeck_tracker::TrackerConfig;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the crew backend
    pub backend_url: String,
    /// Polling cadence for `run` and `watch`
    pub tracker: TrackerConfig,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            bail!(
                "backend_url must start with http:// or https:// (got '{}')",
                self.backend_url
            );
        }

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than 0");
        }

        self.tracker.validate()
    }

    /// Builds a backend client for the configured URL
    pub fn backend_client(&self) -> Result<BackendClient> {
        BackendClient::with_timeout(&self.backend_url, self.request_timeout)
            .context("Failed to build backend client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> Config {
        Config {
            backend_url: url.to_string(),
            tracker: TrackerConfig::default(),
            request_timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_accepts_http_urls() {
        assert!(config("http://localhost:8000").validate().is_ok());
        assert!(config("https://crews.example.com").validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let err = config("localhost:8000").validate().unwrap_err();
        assert!(err.to_string().contains("http://"));
        assert!(config("ftp://host").validate().is_err());
    }

    #[test]
    fn test_rejects_zero_durations() {
        let mut cfg = config("http://localhost:8000");
        cfg.request_timeout = Duration::ZERO;
        assert!(cfg.validate().is_err());

        let mut cfg = config("http://localhost:8000");
        cfg.tracker = TrackerConfig::new(Duration::ZERO);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_builds_client_with_trimmed_url() {
        let client = config("http://localhost:8000/").backend_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
