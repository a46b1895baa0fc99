//! Client error types

use thiserror::Error;

/// Errors produced by the guild API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or an unreadable response body
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status} - {message}")]
    Api { status: u16, message: String },

    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// HTTP status of a server rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Validation(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
