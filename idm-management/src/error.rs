use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::log_sanitizer::truncate_for_log;

/// Error payload returned by the management API for any non-2xx response.
///
/// The service answers failures with a body of the form
/// `{"statusCode": 404, "error": "Not Found", "message": "...", "errorCode": "..."}`.
/// The schema belongs to the remote service, so every field other than the
/// status code is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteError {
    /// HTTP status code of the response.
    #[serde(default)]
    pub status_code: u16,
    /// Short reason phrase, e.g. `"Not Found"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human readable description from the service.
    #[serde(default)]
    pub message: String,
    /// Machine readable error code, e.g. `"inexistent_custom_domain"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl RemoteError {
    /// Builds a `RemoteError` from a raw HTTP status and response body.
    ///
    /// The HTTP status always wins over any `statusCode` in the body. When the
    /// body is not the service's error document, the (truncated) body text
    /// becomes the message and the canonical reason phrase fills `error`.
    pub fn from_response(status_code: u16, body: &str) -> Self {
        match serde_json::from_str::<Self>(body) {
            Ok(mut decoded) => {
                decoded.status_code = status_code;
                if decoded.error.is_none() {
                    decoded.error = canonical_reason(status_code);
                }
                decoded
            }
            Err(_) => Self {
                status_code,
                error: canonical_reason(status_code),
                message: truncate_for_log(body.trim()),
                error_code: None,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    pub fn is_conflict(&self) -> bool {
        self.status_code == 409
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = self.error.as_deref().unwrap_or("Unknown");
        if self.message.is_empty() {
            write!(f, "{} {reason}", self.status_code)
        } else {
            write!(f, "{} {reason}: {}", self.status_code, self.message)
        }
    }
}

impl std::error::Error for RemoteError {}

fn canonical_reason(status_code: u16) -> Option<String> {
    reqwest::StatusCode::from_u16(status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
}

/// Unified error type for every management API call.
///
/// Remote failures (any response outside 2xx) are reported as
/// [`Remote`](Self::Remote) carrying the decoded error payload. The remaining
/// variants cover failures that happen before a response is available or
/// while decoding it. Nothing is retried.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ManagementError {
    /// The service answered with a status outside 2xx.
    #[error("{0}")]
    Remote(RemoteError),

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A 2xx response body could not be decoded into the expected type.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client configuration is unusable (missing token, bad base URL, ...).
    #[error("Invalid configuration: {detail}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        detail: String,
    },
}

impl ManagementError {
    /// HTTP status of a remote failure, `None` for local failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote(remote) => Some(remote.status_code),
            _ => None,
        }
    }

    /// `true` when the service reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote(remote) if remote.is_not_found())
    }

    /// Whether this is expected behavior (caller input, missing resource, ...), used for log levels.
    ///
    /// Returns `true` for 4xx remote errors, which should be logged at `warn`;
    /// everything else is logged at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Remote(remote) if (400..500).contains(&remote.status_code))
    }
}

impl From<RemoteError> for ManagementError {
    fn from(remote: RemoteError) -> Self {
        Self::Remote(remote)
    }
}

/// Convenience type alias for `Result<T, ManagementError>`.
pub type Result<T> = std::result::Result<T, ManagementError>;
