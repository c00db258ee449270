//! Client error types.
//!
//! [`ApiError`] classifies every way a request can fail so the application can
//! pick the right user-facing message. [`ClientError`] covers construction of
//! the client itself.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// A failed request to the profile service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 401. Credentials rejected or token not accepted.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` (or `detail`) string from the JSON error body, if any.
        message: Option<String>,
    },

    /// The request never produced a response (DNS, connect, reset, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not what the endpoint promises.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Local failure preparing the request body, e.g. reading an upload.
    #[error("could not read upload: {0}")]
    Io(String),
}

impl ApiError {
    /// HTTP 401.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Transport failure with no response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Server-provided explanation, passed through verbatim.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Classify a non-success response from its status and raw body.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return Self::Unauthorized;
        }

        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .filter(|message| !message.is_empty());

        Self::Status { status: status.as_u16(), message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_response(status, &[])
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Error body shape. FastAPI-style services use `detail`, which may also be a
/// list of validation errors rather than a string.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// `message` if it is a string, otherwise `detail` if that is.
    fn into_message(self) -> Option<String> {
        [self.message, self.detail].into_iter().flatten().find_map(|value| match value {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        })
    }
}

/// Failure constructing a client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL is not an absolute http(s) URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be built (TLS backend initialization).
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_ignores_body() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, br#"{"message":"nope"}"#);
        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn message_is_passed_through() {
        let err =
            ApiError::from_response(StatusCode::BAD_REQUEST, br#"{"message":"Email taken"}"#);
        assert_eq!(err.server_message(), Some("Email taken"));
    }

    #[test]
    fn detail_is_accepted_as_message() {
        let err = ApiError::from_response(StatusCode::CONFLICT, br#"{"detail":"Already exists"}"#);
        assert_eq!(err.server_message(), Some("Already exists"));
    }

    #[test]
    fn message_wins_over_detail() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"message":"Email taken","detail":"duplicate key"}"#,
        );
        assert_eq!(err.server_message(), Some("Email taken"));
    }

    #[test]
    fn detail_used_when_message_is_not_text() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"message":null,"detail":"Already exists"}"#,
        );
        assert_eq!(err.server_message(), Some("Already exists"));
    }

    #[test]
    fn structured_detail_is_no_message() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#,
        );
        assert_eq!(err, ApiError::Status { status: 422, message: None });
    }

    #[test]
    fn non_json_body_is_no_message() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, b"oops");
        assert_eq!(err, ApiError::Status { status: 500, message: None });
        assert!(!err.is_network());
    }
}
