// Rust guideline compliant 2026-10-19

//! Core data models for issuedesk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned issue identifier.
pub type IssueId = u64;

/// Directory user identifier.
pub type UserId = u64;

/// Status of an issue.
///
/// Only `Pending` and `InProgress` are produced by the status engine. The
/// remaining states are accepted from explicit updates and passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Issue has been filed and nobody works on it yet.
    Pending,
    /// Issue is assigned and being worked on.
    InProgress,
    /// Work on the issue is finished.
    Completed,
    /// Issue was dropped.
    Cancelled,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Returns the wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user known to the directory.
///
/// Fields other than `id` and `name` are kept verbatim and never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Directory identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Remaining profile fields.
    #[serde(flatten, default)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Creates a user with an empty profile.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            profile: serde_json::Map::new(),
        }
    }
}

/// An issue record as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Store-assigned identifier, immutable after creation.
    pub id: IssueId,
    /// One-line summary.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Current status.
    pub status: Status,
    /// Snapshot of the assignee taken at assignment time.
    pub user: Option<User>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last successful mutation.
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Returns true if nobody is assigned.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.user.is_none()
    }
}

/// Everything the store needs to insert a new issue.
///
/// The store assigns `id` and both timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    /// Title of the new issue.
    pub title: String,
    /// Description of the new issue.
    pub description: String,
    /// Initial status derived by the engine.
    pub status: Status,
    /// Initial assignee snapshot derived by the engine.
    pub user: Option<User>,
}

/// Request to create an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssue {
    /// Title of the issue.
    pub title: String,
    /// Description of the issue.
    #[serde(default)]
    pub description: String,
    /// Optional assignee.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl CreateIssue {
    /// Creates an unassigned creation request.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            user_id: None,
        }
    }

    /// Sets the requested assignee.
    #[must_use]
    pub fn assigned_to(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Validates the creation request.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or whitespace.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidIssue(
                "Title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update of an existing issue.
///
/// Absent fields keep their current value. Empty `title` and `description`
/// values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssue {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit status.
    #[serde(default)]
    pub status: Option<Status>,
    /// New assignee.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl UpdateIssue {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit status.
    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
