//! Error types for the book tracker API client.
//!
//! # Design
//! A failure either happened before any response arrived (`Transport`), came
//! back as a non-2xx status (`Status`), or broke while (de)serializing JSON.
//! Each variant can report the status text a browser-style HTTP client would
//! expose, which is what `get_all_books` folds into its error value.

use thiserror::Error;

/// Status text reported when no response was received at all.
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown Error";

/// Errors returned by `BookTrackerClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {status_text}: {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {message}")]
    Deserialization { status_text: String, message: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// The transport-level status text associated with this failure.
    pub fn status_text(&self) -> &str {
        match self {
            ApiError::Status { status_text, .. } => status_text,
            ApiError::Deserialization { status_text, .. } => status_text,
            ApiError::Transport(_) | ApiError::Serialization(_) => UNKNOWN_STATUS_TEXT,
        }
    }

    /// `true` when the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
