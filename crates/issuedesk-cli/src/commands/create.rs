// Rust guideline compliant 2026-10-19

//! Implementation of the `issuedesk create` command.
//!
//! Creates an issue in the seeded in-memory store and prints it. The store
//! lives for this invocation only.

use crate::output::OutputFormatter;
use anyhow::Result;
use issuedesk_app::IssueService;
use issuedesk_core::{CreateIssue, IssueStore, UserDirectory, UserId};

/// Creates an issue with the specified parameters.
///
/// # Arguments
///
/// * `title` - The issue title
/// * `description` - The issue description
/// * `user` - Optional assignee id
///
/// # Errors
///
/// Returns an error if the title is empty.
pub fn execute<S, D>(
    service: &IssueService<S, D>,
    title: String,
    description: Option<String>,
    user: Option<UserId>,
    formatter: &dyn OutputFormatter,
) -> Result<()>
where
    S: IssueStore,
    D: UserDirectory,
{
    let request = CreateIssue {
        title,
        description: description.unwrap_or_default(),
        user_id: user,
    };

    let issue = service.create_issue(request)?;
    println!("{}", formatter.format_issue(&issue));
    Ok(())
}
