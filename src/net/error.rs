//! Failure taxonomy for API calls and the signal handed to the dispatcher.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call resolves as `Err(ApiError)` to its caller. The
//! dispatcher only observes an [`ErrorSignal`] derived from it; it never
//! consumes or replaces the error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::path::PathBuf;

use serde_json::Value;

/// Errors produced by [`crate::net::client::ApiClient`] and the services.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect, timeout, build).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API responded with status {status}")]
    Status {
        status: u16,
        /// Parsed body; `None` when the response carried no body.
        body: Option<Value>,
        raw: String,
    },

    /// A successful response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A downloaded file could not be written locally.
    #[error("failed to save {}: {source}", .path.display())]
    SaveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// Empty bodies count as absent. Non-JSON text is kept as a JSON string.
    #[must_use]
    pub fn from_status(status: u16, bytes: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(bytes).into_owned();
        let body = if raw.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&raw).unwrap_or_else(|_| Value::String(raw.clone())))
        };
        Self::Status { status, body, raw }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Backend error code (`"A001"`, ...) when the body carried one.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Status { body: Some(body), .. } => body.get("code").and_then(Value::as_str),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

/// What the dispatcher sees of a failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorSignal {
    /// Backend code, only when the body had a string `code` field.
    pub code: Option<String>,
    /// Backend message, only when the body had a string `message` field.
    pub message: Option<String>,
    /// Whether the failure carried a response body at all.
    pub has_body: bool,
    /// Display form of the underlying failure, for logging.
    pub raw: String,
}

impl ErrorSignal {
    #[must_use]
    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::Status { body, .. } => Self::from_body(body.as_ref(), error.to_string()),
            other => Self::without_body(other.to_string()),
        }
    }

    /// Build a signal from an optional response body. Fields with the wrong
    /// JSON type are treated as absent.
    #[must_use]
    pub fn from_body(body: Option<&Value>, raw: impl Into<String>) -> Self {
        let Some(body) = body else {
            return Self::without_body(raw);
        };
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);
        Self { code: field("code"), message: field("message"), has_body: true, raw: raw.into() }
    }

    #[must_use]
    pub fn without_body(raw: impl Into<String>) -> Self {
        Self { code: None, message: None, has_body: false, raw: raw.into() }
    }
}
