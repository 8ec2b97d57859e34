//! Error types for ytlinks

use thiserror::Error;

/// Main error type for resolution operations
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No video identifier found in: {0}")]
    NoIdentifierFound(String),

    #[error("Watch page configuration unavailable")]
    SessionConfigUnavailable,

    #[error("Player API request failed: {0}")]
    ApiRequestFailed(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResolveError {
    /// Check if the error aborts a whole resolution
    ///
    /// Only identifier extraction, session negotiation and the player API
    /// call abort outright; manifest and per-variant failures are absorbed
    /// where they occur.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ResolveError::NoIdentifierFound(_)
                | ResolveError::SessionConfigUnavailable
                | ResolveError::ApiRequestFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_errors() {
        assert!(ResolveError::NoIdentifierFound("x".to_string()).is_fatal());
        assert!(ResolveError::SessionConfigUnavailable.is_fatal());
        assert!(ResolveError::ApiRequestFailed("boom".to_string()).is_fatal());
    }

    #[test]
    fn test_non_fatal_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ResolveError::from(err).is_fatal());
    }

    #[test]
    fn test_error_display() {
        let err = ResolveError::NoIdentifierFound("https://example.com".to_string());
        assert_eq!(
            err.to_string(),
            "No video identifier found in: https://example.com"
        );
    }
}
