// Rust guideline compliant 2026-10-19

//! Error handling for issuedesk application services.

use issuedesk_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested issue was not found.
    NotFound,
    /// The request included invalid inputs.
    InvalidInput,
    /// Issue data failed validation.
    ValidationError,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading seed or config files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Unexpected internal failure.
    Internal,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Internal failure, such as a poisoned store lock.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Internal(_) => ErrorCode::Internal,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidIssue(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            _ => None,
        }
    }

    /// Returns true if the error means the referenced issue does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_code_and_details() {
        let error = AppError::from(CoreError::NotFound(12));
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.details(), Some(serde_json::json!({ "id": 12 })));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_validation_code() {
        let error = AppError::from(CoreError::InvalidIssue("Title cannot be empty".into()));
        assert_eq!(error.code(), ErrorCode::ValidationError);
        assert_eq!(error.to_string(), "Invalid issue: Title cannot be empty");
        assert_eq!(error.details(), None);
    }

    #[test]
    fn test_error_code_wire_names() {
        let value = serde_json::to_value(ErrorCode::InvalidInput).unwrap();
        assert_eq!(value, "invalid_input");
    }
}
