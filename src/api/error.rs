//! API Error Types
//!
//! Structured error-kind taxonomy for the transport layer. Failures carry
//! the server's message when one was sent and a generic per-kind fallback
//! otherwise.

use serde::Deserialize;

/// What went wrong, independent of the message text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401: the session is missing, expired, or rejected
    Unauthorized,
    /// Other 4xx: the request was understood but refused
    Invalid,
    /// 5xx: the server failed
    Server,
    /// The request never produced a response
    Network,
    /// The response body could not be encoded or decoded
    Decode,
}

impl ErrorKind {
    /// Categorize an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::Unauthorized,
            400..=499 => ErrorKind::Invalid,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Network,
        }
    }

    fn fallback_message(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "Your session has expired. Please sign in again.",
            ErrorKind::Invalid => "Invalid data or already exists",
            ErrorKind::Server => "Server error. Please try again later.",
            ErrorKind::Network => "An error occurred",
            ErrorKind::Decode => "Unexpected response from the server",
        }
    }
}

/// A failed API operation
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    /// Build an error from a response status, preferring the server's
    /// message over the per-kind fallback.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let kind = ErrorKind::from_status(status);
        let message = server_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| kind.fallback_message().to_string());
        Self { kind, message }
    }

    pub fn network(source: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: format!("Network error: {}", source),
        }
    }

    pub fn decode(source: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: format!("Unexpected response: {}", source),
        }
    }

    /// The text shown to the user in a toast
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Error body the server attaches to failed responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categorization() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(400), ErrorKind::Invalid);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::Invalid);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Invalid);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(0), ErrorKind::Network);
    }

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::from_status(409, Some("Email already registered".to_string()));
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_fallback_message_on_empty_body() {
        let err = ApiError::from_status(500, Some(String::new()));
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.user_message(), "Server error. Please try again later.");

        let err = ApiError::from_status(422, None);
        assert_eq!(err.user_message(), "Invalid data or already exists");
    }
}
