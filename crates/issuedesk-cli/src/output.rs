// Rust guideline compliant 2026-10-19

//! Output formatting module for the issuedesk CLI.
//!
//! This module formats issues and users in JSON, table or plain text.

use issuedesk_core::{Issue, OutputFormat, User};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a single issue for display.
    fn format_issue(&self, issue: &Issue) -> String;

    /// Formats a list of issues for display.
    fn format_list(&self, issues: &[Issue]) -> String;

    /// Formats the user directory for display.
    fn format_users(&self, users: &[User]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Issues keep their wire shape so the output can be fed back to other tools.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        serde_json::to_string_pretty(issue)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize issue" }).to_string())
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        let output = json!({
            "issues": issues,
            "total": issues.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize issue list" }).to_string())
    }

    fn format_users(&self, users: &[User]) -> String {
        serde_json::to_string_pretty(&json!({ "users": users }))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize users" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", issue.id));
        output.push_str(&format!("Title:       {}\n", issue.title));
        output.push_str(&format!("Status:      {}\n", issue.status));
        output.push_str(&format!("Assignee:    {}\n", assignee_label(issue)));
        output.push_str(&format!("Created:     {}\n", issue.created_at.to_rfc3339()));
        output.push_str(&format!("Updated:     {}\n", issue.updated_at.to_rfc3339()));

        if !issue.description.is_empty() {
            output.push_str(&format!("Description: {}\n", issue.description));
        }

        output
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Title", "Assignee", "Updated"]);

        for issue in issues {
            builder.push_record(vec![
                issue.id.to_string(),
                issue.status.to_string(),
                issue.title.clone(),
                assignee_label(issue),
                issue.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_users(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name"]);
        for user in users {
            builder.push_record(vec![user.id.to_string(), user.name.clone()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_issue(&self, issue: &Issue) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", issue.id));
        output.push_str(&format!("{}\n", issue.title));
        output.push_str(&format!("{}\n", issue.status));
        output.push_str(&format!("{}\n", assignee_label(issue)));

        if !issue.description.is_empty() {
            output.push_str(&format!("{}\n", issue.description));
        }

        output
    }

    fn format_list(&self, issues: &[Issue]) -> String {
        if issues.is_empty() {
            return "No issues found.".to_string();
        }

        let mut output = String::new();
        for issue in issues {
            output.push_str(&format!("{} {} {}\n", issue.id, issue.status, issue.title));
        }
        output
    }

    fn format_users(&self, users: &[User]) -> String {
        let mut output = String::new();
        for user in users {
            output.push_str(&format!("{} {}\n", user.id, user.name));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

fn assignee_label(issue: &Issue) -> String {
    match &issue.user {
        Some(user) => format!("{} (#{})", user.name, user.id),
        None => "-".to_string(),
    }
}

/// Creates the formatter for an output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
