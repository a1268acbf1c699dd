// Rust guideline compliant 2026-10-19

//! Implementation of the `issuedesk list` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use issuedesk_app::{parse_status, IssueService, ListOptions};
use issuedesk_core::{IssueStore, UserDirectory, UserId};

/// Lists issues, optionally filtered.
///
/// # Arguments
///
/// * `status` - Status filter (`pending`, `in_progress`, ...)
/// * `assignee` - Only issues assigned to this user
/// * `unassigned` - Only issues without an assignee
/// * `sort` - Sort field (`id`, `title`, `status`, `created_at`, `updated_at`)
///
/// # Errors
///
/// Returns an error if the status filter is invalid.
pub fn execute<S, D>(
    service: &IssueService<S, D>,
    status: Option<String>,
    assignee: Option<UserId>,
    unassigned: bool,
    sort: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()>
where
    S: IssueStore,
    D: UserDirectory,
{
    let status = status.as_deref().map(parse_status).transpose()?;
    let options = ListOptions {
        status,
        assignee,
        unassigned,
        sort,
    };

    let issues = service.list_issues(&options)?;
    println!("{}", formatter.format_list(&issues));
    Ok(())
}
