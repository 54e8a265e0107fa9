//! Error types for the Crewdeck client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the crew backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Failed to read a local file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Message shown when a rejection carries no error text
pub const GENERIC_REJECTION: &str = "Failed to execute crew";

/// Errors that can occur when submitting a crew job
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The backend answered with a non-2xx status
    #[error("{reason}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, or a generic message
        reason: String,
    },

    /// The request never got a usable answer
    #[error("Failed to reach crew backend: {0}")]
    Transport(String),
}

impl SubmitError {
    /// The text to show the operator
    pub fn operator_message(&self) -> String {
        match self {
            SubmitError::Rejected { reason, .. } => reason.clone(),
            SubmitError::Transport(_) => GENERIC_REJECTION.to_string(),
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
