// Rust guideline compliant 2026-10-19

//! Implementation of the `issuedesk show` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use issuedesk_app::IssueService;
use issuedesk_core::{IssueId, IssueStore, UserDirectory};

/// Shows a single issue.
///
/// # Errors
///
/// Returns an error if the issue does not exist.
pub fn execute<S, D>(
    service: &IssueService<S, D>,
    id: IssueId,
    formatter: &dyn OutputFormatter,
) -> Result<()>
where
    S: IssueStore,
    D: UserDirectory,
{
    let issue = service.get_issue(id)?;
    println!("{}", formatter.format_issue(&issue));
    Ok(())
}
