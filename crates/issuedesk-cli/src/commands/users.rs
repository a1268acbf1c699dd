// Rust guideline compliant 2026-10-19

//! Implementation of the `issuedesk users` command.

use crate::output::OutputFormatter;
use issuedesk_app::IssueService;
use issuedesk_core::{IssueStore, UserDirectory};

/// Prints the user directory.
pub fn execute<S, D>(service: &IssueService<S, D>, formatter: &dyn OutputFormatter)
where
    S: IssueStore,
    D: UserDirectory,
{
    println!("{}", formatter.format_users(&service.users()));
}
