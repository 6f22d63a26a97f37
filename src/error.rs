//! Error types for Pinata API operations.

use thiserror::Error;

/// Errors that can occur when talking to the Pinata API.
///
/// A non-2xx response is not an error: it is returned to the caller as a
/// regular [`reqwest::Response`] carrying the status.
#[derive(Debug, Error)]
pub enum PinataError {
    /// The request could not be built (malformed URL or header value).
    #[error("invalid request: {0}")]
    Construction(#[source] reqwest::Error),

    /// A metadata value outside of string, number, or date was supplied.
    #[error("unsupported type {0} for metadata key/value store")]
    UnsupportedMetadataType(&'static str),

    /// JSON encoding of the request body failed.
    #[error("json: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network, TLS, DNS, or timeout failure from the HTTP stack.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl PinataError {
    /// Returns true if the request was aborted by the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PinataError::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PinataError::UnsupportedMetadataType("bool").to_string(),
            "unsupported type bool for metadata key/value store"
        );
    }

    #[test]
    fn test_serialization_error_from_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PinataError::from(err);
        assert!(matches!(err, PinataError::Serialization(_)));
        assert!(err.to_string().starts_with("json: "));
        assert!(!err.is_timeout());
    }
}
