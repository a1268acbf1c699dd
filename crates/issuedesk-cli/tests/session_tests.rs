// Rust guideline compliant 2026-10-19

//! Integration tests for the JSON-lines session protocol.

use chrono::{TimeZone, Utc};
use issuedesk_app::{fixed_clock, MemoryIssueService};
use issuedesk_cli::commands::session;
use issuedesk_core::Seed;
use serde_json::Value;
use std::io::Cursor;

fn service() -> MemoryIssueService {
    let now = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
    MemoryIssueService::from_seed(Seed::builtin().unwrap())
        .unwrap()
        .with_clock(fixed_clock(now))
}

/// Runs `input` through a session and returns one parsed envelope per line.
fn run_session(service: &MemoryIssueService, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    session::run(service, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_get_returns_success_envelope() {
    let responses = run_session(&service(), "{\"op\":\"get\",\"id\":2}\n");

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["status"], "ok");
    assert_eq!(responses[0]["result"]["id"], 2);
    assert_eq!(responses[0]["result"]["user"]["name"], "Lee Seoyeon");
}

#[test]
fn test_get_missing_issue_returns_not_found() {
    let responses = run_session(&service(), "{\"op\":\"get\",\"id\":99}\n");

    assert_eq!(responses[0]["code"], "not_found");
    assert_eq!(responses[0]["details"]["id"], 99);
    assert!(responses[0]["message"].as_str().unwrap().contains("99"));
}

#[test]
fn test_malformed_line_does_not_end_session() {
    let input = "not json\n{\"op\":\"delete\",\"id\":1}\n{\"op\":\"users\"}\n";
    let responses = run_session(&service(), input);

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["code"], "invalid_input");
    assert_eq!(responses[1]["code"], "invalid_input");
    assert_eq!(responses[2]["status"], "ok");
    assert_eq!(responses[2]["result"]["users"].as_array().unwrap().len(), 3);
}

#[test]
fn test_blank_lines_are_skipped() {
    let responses = run_session(&service(), "\n   \n{\"op\":\"users\"}\n\n");
    assert_eq!(responses.len(), 1);
}

#[test]
fn test_first_assignment_escalates_pending_issue() {
    let input = "{\"op\":\"update\",\"id\":1,\"userId\":3,\"status\":\"CANCELLED\"}\n";
    let responses = run_session(&service(), input);

    let issue = &responses[0]["result"];
    assert_eq!(issue["status"], "IN_PROGRESS");
    assert_eq!(issue["user"]["id"], 3);
    assert_eq!(issue["updatedAt"], "2025-02-01T12:00:00Z");
    assert_eq!(issue["createdAt"], "2025-01-06T09:00:00Z");
}

#[test]
fn test_mutations_persist_across_lines() {
    let input = concat!(
        "{\"op\":\"create\",\"title\":\"A\",\"description\":\"d\"}\n",
        "{\"op\":\"update\",\"id\":5,\"userId\":2}\n",
        "{\"op\":\"update\",\"id\":5,\"userId\":3,\"title\":\"\"}\n",
        "{\"op\":\"get\",\"id\":5}\n",
    );
    let responses = run_session(&service(), input);

    assert_eq!(responses[0]["result"]["id"], 5);
    assert_eq!(responses[0]["result"]["status"], "PENDING");
    assert!(responses[0]["result"]["user"].is_null());

    assert_eq!(responses[1]["result"]["status"], "IN_PROGRESS");
    assert_eq!(responses[1]["result"]["user"]["id"], 2);

    let last = &responses[3]["result"];
    assert_eq!(last["title"], "A");
    assert_eq!(last["status"], "IN_PROGRESS");
    assert_eq!(last["user"]["id"], 3);
}

#[test]
fn test_create_with_blank_title_is_rejected() {
    let responses = run_session(
        &service(),
        "{\"op\":\"create\",\"title\":\"  \",\"description\":\"d\"}\n",
    );
    assert_eq!(responses[0]["code"], "validation_error");
}

#[test]
fn test_list_filters_by_status() {
    let input = "{\"op\":\"list\",\"status\":\"pending\"}\n{\"op\":\"list\"}\n";
    let responses = run_session(&service(), input);

    let pending = responses[0]["result"]["issues"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], 1);

    let all = responses[1]["result"]["issues"].as_array().unwrap();
    let ids: Vec<u64> = all.iter().map(|issue| issue["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_list_with_unknown_status_is_invalid_input() {
    let responses = run_session(&service(), "{\"op\":\"list\",\"status\":\"blocked\"}\n");
    assert_eq!(responses[0]["code"], "invalid_input");
}

#[test]
fn test_summary_counts_outcomes() {
    let service = service();
    let input = "{\"op\":\"get\",\"id\":1}\n{\"op\":\"get\",\"id\":42}\n{}\n";
    let summary = session::run(&service, Cursor::new(input), Vec::new()).unwrap();

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 2);
}
