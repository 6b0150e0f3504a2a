//! Error type shared by the mediator and every endpoint.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (connection refused, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the credential (401).
    #[error("Unauthorized (401 Unauthorized): {body}")]
    Unauthorized { body: Value },

    /// Any other non-success status.
    #[error("Request failed ({status}): {body}")]
    Http { status: StatusCode, body: Value },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Build the failure for a non-success response.
    pub fn from_status(status: StatusCode, body: Value) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized { body }
        } else {
            ApiError::Http { status, body }
        }
    }

    /// Numeric status, when a response was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED.as_u16()),
            ApiError::Http { status, .. } => Some(status.as_u16()),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Json(_) | ApiError::Session(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Response payload carried by an HTTP failure.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Unauthorized { body } | ApiError::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}
