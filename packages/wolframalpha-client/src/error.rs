//! Error types for the Wolfram|Alpha client.

use thiserror::Error;

/// Result type for client and extraction operations.
pub type Result<T> = std::result::Result<T, WolframError>;

/// Errors returned by answer extraction, decoding, and transport.
#[derive(Debug, Error)]
pub enum WolframError {
    /// The result carries no sections to scan
    #[error("no sections in result, check for errors in the result or the presence of 'did you mean' suggestions")]
    NoSections,

    /// A long-form date was seen before any numeric subsection
    #[error("numerical answer is likely to be a date")]
    ProbablyDate,

    /// No subsection crossed the numeric density threshold
    #[error("no answer above numerical likeliness threshold")]
    NoLikelyAnswer,

    /// Density check passed but no number could be located in the text
    #[error("no number found in likely numerical answer")]
    NoMatch,

    /// Response body is not a valid result document
    #[error("invalid response format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    /// Configuration error (missing app id, invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl WolframError {
    /// Whether a failed numerical lookup should fall back to the longest answer.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WolframError::ProbablyDate | WolframError::NoLikelyAnswer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(WolframError::ProbablyDate.is_recoverable());
        assert!(WolframError::NoLikelyAnswer.is_recoverable());
        assert!(!WolframError::NoSections.is_recoverable());
        assert!(!WolframError::NoMatch.is_recoverable());
        assert!(!WolframError::Config("x".into()).is_recoverable());
    }

    #[test]
    fn test_invalid_format_from_serde() {
        let err: WolframError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, WolframError::InvalidFormat(_)));
    }
}
