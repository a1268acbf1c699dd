// Rust guideline compliant 2026-10-19

//! Implementation of the `issuedesk update` command.
//!
//! Applies an update to an issue in the seeded in-memory store and prints the
//! result. Assigning a pending, unassigned issue moves it to `IN_PROGRESS`.

use crate::output::OutputFormatter;
use anyhow::Result;
use issuedesk_app::{parse_status, IssueService};
use issuedesk_core::{IssueId, IssueStore, UpdateIssue, UserDirectory, UserId};

/// Updates an issue with the specified field changes.
///
/// # Arguments
///
/// * `id` - The issue id
/// * `title` - Optional new title; empty values are ignored
/// * `description` - Optional new description; empty values are ignored
/// * `status` - Optional explicit status
/// * `user` - Optional new assignee id
///
/// # Errors
///
/// Returns an error if:
/// - The status is invalid
/// - The issue does not exist
#[allow(clippy::too_many_arguments)]
pub fn execute<S, D>(
    service: &IssueService<S, D>,
    id: IssueId,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    user: Option<UserId>,
    formatter: &dyn OutputFormatter,
) -> Result<()>
where
    S: IssueStore,
    D: UserDirectory,
{
    let request = UpdateIssue {
        title,
        description,
        status: status.as_deref().map(parse_status).transpose()?,
        user_id: user,
    };

    let issue = service.update_issue(id, &request)?;
    println!("{}", formatter.format_issue(&issue));
    Ok(())
}
