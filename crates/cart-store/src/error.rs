//! # Store Error Types
//!
//! Error types for transport and store operations.
//!
//! ## Where Errors Go
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at the Operation Boundary                 │
//! │                                                                         │
//! │   reqwest::Error ──► TransportError ──► to_string() ──► Rejected event │
//! │                                                                         │
//! │   Nothing propagates past the store: every failure settles into        │
//! │   CartState as { status: Error, status_message: <message text> }.       │
//! │   Stack traces and error chains are stripped at this boundary.          │
//! │                                                                         │
//! │   A success payload carrying an `error` string is NOT a failure —      │
//! │   it is a server note, stored with status Idle (see store.rs).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport-level failure for a cart operation.
///
/// ## Design Principles
/// - The `Display` text is what the UI sees as `status_message`, so every
///   variant renders as a standalone human-readable sentence.
/// - Variants are categorized so the UI can decide whether re-dispatching
///   is sensible (`is_retryable`).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level failure (DNS, connect, reset). The payload is the
    /// underlying error's message text, rendered verbatim.
    #[error("{0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success HTTP status.
    #[error("Server returned HTTP {0}")]
    HttpStatus(u16),

    /// The configured base URL or a joined path is invalid.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The response body was not the expected JSON shape.
    #[error("Malformed server response: {0}")]
    Decode(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if let Some(status) = err.status() {
            TransportError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl TransportError {
    /// Returns true if re-dispatching the operation is sensible.
    ///
    /// ## Retryable
    /// - Network failures and timeouts
    /// - Server-side HTTP errors (5xx)
    ///
    /// ## Non-Retryable
    /// - Client-side HTTP errors (4xx)
    /// - Configuration problems (bad URL)
    /// - Malformed responses
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Network(_) | TransportError::Timeout => true,
            TransportError::HttpStatus(code) => *code >= 500,
            TransportError::InvalidUrl(_) | TransportError::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_displays_message_verbatim() {
        let err = TransportError::Network("Network Error".into());
        assert_eq!(err.to_string(), "Network Error");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(TransportError::Network("reset".into()).is_retryable());
        assert!(TransportError::Timeout.is_retryable());
        assert!(TransportError::HttpStatus(503).is_retryable());

        assert!(!TransportError::HttpStatus(404).is_retryable());
        assert!(!TransportError::InvalidUrl("not a url".into()).is_retryable());
        assert!(!TransportError::Decode("missing field".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransportError::HttpStatus(500).to_string(),
            "Server returned HTTP 500"
        );
        assert_eq!(TransportError::Timeout.to_string(), "Request timed out");
    }
}
