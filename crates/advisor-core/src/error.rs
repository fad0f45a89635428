//! Error Types

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Provider error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// LLM provider returned an error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Authentication failed or credential missing
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limited or quota exhausted
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Provider answered without any completion text
    #[error("Provider returned no completion")]
    EmptyCompletion,

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_cause() {
        let err = AdvisorError::RateLimited("insufficient_quota".into());
        assert_eq!(err.to_string(), "Rate limited: insufficient_quota");
        assert_eq!(
            AdvisorError::EmptyCompletion.to_string(),
            "Provider returned no completion"
        );
    }
}
