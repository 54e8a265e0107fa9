//! Tracker configuration
//!
//! Defines the polling cadence and the per-fetch timeout of a tracking
//! session.

use std::time::Duration;

/// Default delay between the end of one fetch and the start of the next
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default upper bound on a single feed fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Delay between one fetch completing (or failing) and the next one starting
    pub poll_interval: Duration,

    /// A fetch taking longer than this counts as a failed tick
    pub fetch_timeout: Duration,
}

impl TrackerConfig {
    /// Creates a configuration with the given interval and the default timeout
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - CREWDECK_POLL_INTERVAL (optional, seconds, default: 5)
    /// - CREWDECK_FETCH_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Self {
        let poll_interval = std::env::var("CREWDECK_POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        let fetch_timeout = std::env::var("CREWDECK_FETCH_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);

        Self {
            poll_interval,
            fetch_timeout,
        }
    }

    /// Sets the polling interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sets the fetch timeout
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.fetch_timeout.is_zero() {
            anyhow::bail!("fetch_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = TrackerConfig::default();
        assert!(config.validate().is_ok());

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.poll_interval = Duration::from_millis(250);
        assert!(config.validate().is_ok());

        let config = config.with_fetch_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
