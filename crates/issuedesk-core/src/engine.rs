// Rust guideline compliant 2026-10-19

//! Status engine for issue creation and update.
//!
//! The engine derives an issue's status and assignee from a request. It is a
//! pure function of the existing issue, the request and the user directory:
//!
//! - Create with an assignee → InProgress
//! - Create without an assignee → Pending
//! - First assignment of an unassigned Pending issue → InProgress, even over an
//!   explicit status in the same request
//! - Nothing ever moves an issue back to Pending or removes its assignee
//!
//! Directory misses are silent: an unknown user id resolves to no user.

use crate::directory::UserDirectory;
use crate::models::{CreateIssue, Issue, IssueDraft, Status, UpdateIssue, User, UserId};
use chrono::{DateTime, Utc};

/// Status and assignee produced by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Resulting status.
    pub status: Status,
    /// Resulting assignee snapshot.
    pub user: Option<User>,
}

/// Derives the initial status and assignee of a new issue.
///
/// # Arguments
///
/// * `user_id` - Requested assignee, if any
/// * `directory` - Directory used to resolve the assignee
///
/// # Returns
///
/// `InProgress` with the resolved user when an assignee was requested, even
/// if the lookup misses; `Pending` with no user otherwise.
pub fn derive_creation_state<D>(user_id: Option<UserId>, directory: &D) -> Transition
where
    D: UserDirectory + ?Sized,
{
    match user_id {
        Some(id) => Transition {
            status: Status::InProgress,
            user: directory.lookup(id),
        },
        None => Transition {
            status: Status::Pending,
            user: None,
        },
    }
}

/// Derives the status and assignee of an existing issue after an update.
///
/// # Arguments
///
/// * `existing` - The issue as currently stored
/// * `request` - The partial update
/// * `directory` - Directory used to resolve a new assignee
///
/// # Returns
///
/// The new status and assignee snapshot.
pub fn derive_update_state<D>(existing: &Issue, request: &UpdateIssue, directory: &D) -> Transition
where
    D: UserDirectory + ?Sized,
{
    let status = if escalates(existing, request) {
        Status::InProgress
    } else {
        request.status.unwrap_or(existing.status)
    };

    let user = match request.user_id {
        Some(id) => directory.lookup(id),
        None => existing.user.clone(),
    };

    Transition { status, user }
}

/// Returns true if the update is the first assignment of a pending issue.
///
/// The guard looks at the stored assignee, so reassigning an already assigned
/// issue never escalates.
#[must_use]
pub fn escalates(existing: &Issue, request: &UpdateIssue) -> bool {
    existing.user.is_none() && request.user_id.is_some() && existing.status == Status::Pending
}

/// Builds the draft the store inserts for a creation request.
pub fn creation_draft<D>(request: CreateIssue, directory: &D) -> IssueDraft
where
    D: UserDirectory + ?Sized,
{
    let Transition { status, user } = derive_creation_state(request.user_id, directory);
    IssueDraft {
        title: request.title,
        description: request.description,
        status,
        user,
    }
}

/// Applies an update to an issue and returns the merged record.
///
/// Combines [`derive_update_state`] with the text merge rule and refreshes
/// `updated_at`. `id` and `created_at` are carried over unchanged.
pub fn apply_update<D>(
    existing: Issue,
    request: &UpdateIssue,
    directory: &D,
    now: DateTime<Utc>,
) -> Issue
where
    D: UserDirectory + ?Sized,
{
    let Transition { status, user } = derive_update_state(&existing, request, directory);
    Issue {
        title: merge_text(existing.title, request.title.as_deref()),
        description: merge_text(existing.description, request.description.as_deref()),
        status,
        user,
        updated_at: now,
        ..existing
    }
}

/// Replaces `existing` with `update` only when the update is non-empty.
///
/// An update can therefore never clear a field to the empty string.
#[must_use]
pub fn merge_text(existing: String, update: Option<&str>) -> String {
    match update {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => existing,
    }
}
