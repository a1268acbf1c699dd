// Rust guideline compliant 2026-10-19

//! Error types for the issuedesk core library.

use crate::models::IssueId;
use thiserror::Error;

/// Result type alias for issuedesk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for issuedesk operations.
///
/// A user id that does not resolve in the directory is deliberately absent
/// here: lookups that miss yield "no user" instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid issue data.
    #[error("Invalid issue: {0}")]
    InvalidIssue(String),

    /// Issue not found.
    #[error("Issue not found: {0}")]
    NotFound(IssueId),

    /// Invalid configuration file or environment override.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
