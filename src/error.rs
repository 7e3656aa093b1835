//! Unified error type hierarchy for hwcompare
//!
//! Provides structured error handling with ValidationError, RequestError,
//! ParseError, CompareError and ConfigError.

use std::io;
use thiserror::Error;

/// Field-level input validation errors.
///
/// Recoverable and reported per input field; a field carrying one of these
/// blocks submission and never reaches the requester.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("model name cannot be empty")]
    EmptyName,

    #[error("model name is too short")]
    TooShort,

    #[error("model name is too long")]
    TooLong,
}

impl ValidationError {
    /// Get the message shown under the offending input field
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Model name cannot be empty.",
            ValidationError::TooShort => "Model name seems too short. Please enter a valid model.",
            ValidationError::TooLong => "Model name seems too long.",
        }
    }
}

/// Collaborator call failures (network, auth, quota, safety blocks).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request blocked by the service: {0}")]
    Blocked(String),

    #[error("service returned no content")]
    EmptyResponse,

    #[error("no API credential found (set GEMINI_API_KEY or API_KEY)")]
    MissingCredential,
}

/// The collaborator answered, but not with a usable comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no JSON object found in response")]
    NoJson,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("response is not a JSON object")]
    WrongShape,

    #[error("missing hardware slot '{0}'")]
    MissingSlot(String),

    #[error("missing summary object")]
    MissingSummary,

    #[error("missing summary field '{0}'")]
    MissingSummaryField(&'static str),

    #[error("invalid value '{value}' for summary field '{field}'")]
    InvalidWinner { field: &'static str, value: String },
}

/// Failure of a whole comparison round trip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompareError {
    /// Get a user-facing error message suitable for UI display
    ///
    /// Request and parse failures are presented alike; only the logs tell
    /// them apart.
    pub fn user_message(&self) -> String {
        match self {
            CompareError::Request(RequestError::MissingCredential) => {
                "No API key configured. Set GEMINI_API_KEY and restart.".to_string()
            }
            CompareError::Request(e) => format!("Failed to get comparison data: {}", e),
            CompareError::Parse(_) => {
                "Failed to process the comparison data. The format received from the API was invalid. Please try again."
                    .to_string()
            }
        }
    }
}

/// Settings file parsing and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error during config operations: {0}")]
    IoError(#[from] io::Error),
}

/// Top-level result type for operations that may fail.
/// Use this as the return type for all fallible functions.
/// Example: `fn risky_operation() -> Result<String>`
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::EmptyName.message(), "Model name cannot be empty.");
        assert!(ValidationError::TooShort.message().contains("too short"));
        assert!(ValidationError::TooLong.message().contains("too long"));
    }

    #[test]
    fn test_request_error_display() {
        let err = RequestError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        assert_eq!(err.to_string(), "API error (429): Resource has been exhausted");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidWinner {
            field: "gamingWinner",
            value: "both".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'both' for summary field 'gamingWinner'"
        );
    }

    #[test]
    fn test_compare_error_user_message_hides_parse_details() {
        let err = CompareError::from(ParseError::MissingSummaryField("gamingWinner"));
        let msg = err.user_message();
        assert!(msg.contains("format received from the API was invalid"));
        assert!(!msg.contains("gamingWinner"));
    }

    #[test]
    fn test_compare_error_user_message_wraps_request_error() {
        let err = CompareError::from(RequestError::Transport("connection refused".to_string()));
        assert!(err.user_message().contains("connection refused"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound("/etc/config.json".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /etc/config.json"
        );
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err("test error".into());
        assert!(result.is_err());
    }
}
