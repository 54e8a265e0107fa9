//! Crewdeck HTTP Client
//!
//! A small, typed HTTP client for the crew backend.
//!
//! The client covers the backend's operator-facing endpoints:
//! - Crew submission (`POST /execute-crew`)
//! - The shared update feed (`GET /agent-output`)
//! - The file store (`GET /files`, `POST /upload`)
//!
//! # Example
//!
//! ```no_run
//! use crewdeck_client::BackendClient;
//! use crewdeck_core::build_payload;
//! use crewdeck_core::domain::client::ClientProfile;
//! use crewdeck_core::domain::job::JobKind;
//! use crewdeck_core::domain::settings::SettingsRegistry;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BackendClient::new("http://localhost:8000");
//!     let profile = ClientProfile::new("c1");
//!     let payload = build_payload(
//!         JobKind::Autoblogging,
//!         "draft text",
//!         Some(&profile),
//!         SettingsRegistry::new().settings_for(JobKind::Autoblogging),
//!         None,
//!     );
//!
//!     let task_id = client.submit(payload).await?;
//!     println!("Submitted task: {}", task_id);
//!     Ok(())
//! }
//! ```

mod crew;
pub mod error;
mod feed;
mod files;

// Re-export commonly used types
pub use error::{ClientError, Result, SubmitError};
pub use feed::FeedSource;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the crew backend
///
/// All requests go to a single configured base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use crewdeck_client::BackendClient;
    ///
    /// let client = BackendClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a backend client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not needed
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
