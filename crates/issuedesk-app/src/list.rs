// Rust guideline compliant 2026-10-19

//! Listing and filtering helpers for issues.

use crate::error::{AppError, Result};
use issuedesk_core::{Issue, Status, UserId};
use rayon::prelude::*;

/// List options for filtering and sorting issues.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: Option<Status>,
    /// Filter by assignee id.
    pub assignee: Option<UserId>,
    /// Only issues without an assignee.
    pub unassigned: bool,
    /// Sort field override; store order (ascending id) when unset.
    pub sort: Option<String>,
}

impl ListOptions {
    /// Options that only filter by status.
    #[must_use]
    pub fn with_status(status: Option<Status>) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

/// Parses a status string into a `Status` value.
///
/// Accepts wire names (`IN_PROGRESS`) as well as lowercase and dashed forms.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    match value.to_lowercase().replace('-', "_").as_str() {
        "pending" => Ok(Status::Pending),
        "in_progress" => Ok(Status::InProgress),
        "completed" => Ok(Status::Completed),
        "cancelled" | "canceled" => Ok(Status::Cancelled),
        _ => Err(AppError::InvalidInput(format!("Invalid status: {}", value))),
    }
}

/// Filters and sorts a list of issues based on `ListOptions`.
#[must_use]
pub fn filter_issues(issues: Vec<Issue>, options: &ListOptions) -> Vec<Issue> {
    let mut issues = apply_filters(issues, options);
    if let Some(field) = &options.sort {
        sort_issues(&mut issues, field);
    }
    issues
}

fn apply_filters(issues: Vec<Issue>, options: &ListOptions) -> Vec<Issue> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |issue: &Issue| {
        if let Some(status) = options.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(assignee) = options.assignee {
            if issue.user.as_ref().map(|user| user.id) != Some(assignee) {
                return false;
            }
        }

        if options.unassigned && !issue.is_unassigned() {
            return false;
        }

        true
    };

    if issues.len() >= PARALLEL_THRESHOLD {
        issues.into_par_iter().filter(|issue| predicate(issue)).collect()
    } else {
        issues.into_iter().filter(predicate).collect()
    }
}

fn sort_issues(issues: &mut [Issue], field: &str) {
    match field {
        "title" => issues.sort_by(|a, b| a.title.cmp(&b.title)),
        "status" => issues.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        "created_at" => issues.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        "updated_at" => issues.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        _ => issues.sort_by_key(|issue| issue.id),
    }
}
