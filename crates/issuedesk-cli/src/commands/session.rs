// Rust guideline compliant 2026-10-19

//! Implementation of the `issuedesk session` command.
//!
//! A session reads one JSON request per line and answers with one JSON
//! envelope per line. All requests share one in-memory store, so issues
//! created early in a session can be updated later in it.
//!
//! Requests are tagged by `op`:
//!
//! ```text
//! {"op":"list","status":"PENDING"}
//! {"op":"get","id":1}
//! {"op":"create","title":"A","description":"d","userId":7}
//! {"op":"update","id":1,"userId":3,"status":"COMPLETED"}
//! {"op":"users"}
//! ```

use anyhow::Result;
use issuedesk_app::{parse_status, AppError, ErrorCode, IssueService, ListOptions};
use issuedesk_core::{CreateIssue, IssueId, IssueStore, UpdateIssue, UserDirectory};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// A single session request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionRequest {
    /// List issues, optionally filtered by status.
    List {
        /// Status filter.
        #[serde(default)]
        status: Option<String>,
    },
    /// Load one issue.
    Get {
        /// Issue id.
        id: IssueId,
    },
    /// Create an issue.
    Create(CreateIssue),
    /// Update an issue.
    Update {
        /// Issue id.
        id: IssueId,
        /// Field changes.
        #[serde(flatten)]
        changes: UpdateIssue,
    },
    /// List directory users.
    Users,
}

/// One reply line.
///
/// Successes carry `"status":"ok"` and the result. Failures carry a stable
/// error code, the message and optional structured details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SessionResponse {
    /// The request succeeded.
    Ok {
        /// Always `"ok"`.
        status: &'static str,
        /// Request-specific payload.
        result: Value,
    },
    /// The request failed.
    Error {
        /// Stable error code.
        code: ErrorCode,
        /// Human-readable message.
        message: String,
        /// Structured details, such as the missing issue id.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
}

impl SessionResponse {
    /// Builds the reply for a request outcome.
    #[must_use]
    pub fn from_outcome(outcome: Result<Value, AppError>) -> Self {
        match outcome {
            Ok(result) => Self::Ok {
                status: "ok",
                result,
            },
            Err(error) => Self::Error {
                code: error.code(),
                message: error.to_string(),
                details: error.details(),
            },
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Requests answered with a success envelope.
    pub succeeded: usize,
    /// Requests answered with an error envelope.
    pub failed: usize,
}

/// Runs a session over stdin and stdout.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub fn execute<S, D>(service: &IssueService<S, D>) -> Result<()>
where
    S: IssueStore,
    D: UserDirectory,
{
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = run(service, stdin.lock(), stdout.lock())?;
    debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "session finished"
    );
    Ok(())
}

/// Answers every request line from `reader` on `writer`.
///
/// Blank lines are skipped. A malformed line is answered with an
/// `invalid_input` envelope and the session continues.
///
/// # Errors
///
/// Returns an error only for IO failures on `reader` or `writer`.
pub fn run<S, D, R, W>(service: &IssueService<S, D>, reader: R, mut writer: W) -> Result<SessionSummary>
where
    S: IssueStore,
    D: UserDirectory,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = SessionResponse::from_outcome(handle_line(service, line));
        match &response {
            SessionResponse::Ok { .. } => summary.succeeded += 1,
            SessionResponse::Error { code, message, .. } => {
                summary.failed += 1;
                warn!(?code, "session request failed: {}", message);
            }
        }

        writeln!(writer, "{}", serde_json::to_string(&response)?)?;
        writer.flush()?;
    }

    Ok(summary)
}

/// Parses and dispatches one request line.
///
/// # Errors
///
/// Returns an error if the line is malformed or the request fails.
pub fn handle_line<S, D>(service: &IssueService<S, D>, line: &str) -> Result<Value, AppError>
where
    S: IssueStore,
    D: UserDirectory,
{
    let request: SessionRequest = serde_json::from_str(line)
        .map_err(|err| AppError::InvalidInput(format!("Malformed request: {}", err)))?;
    handle_request(service, request)
}

/// Dispatches a parsed request.
///
/// # Errors
///
/// Returns an error if the request fails.
pub fn handle_request<S, D>(
    service: &IssueService<S, D>,
    request: SessionRequest,
) -> Result<Value, AppError>
where
    S: IssueStore,
    D: UserDirectory,
{
    let value = match request {
        SessionRequest::List { status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let issues = service.list_issues(&ListOptions::with_status(status))?;
            serde_json::json!({ "issues": issues })
        }
        SessionRequest::Get { id } => to_value(service.get_issue(id)?)?,
        SessionRequest::Create(request) => to_value(service.create_issue(request)?)?,
        SessionRequest::Update { id, changes } => to_value(service.update_issue(id, &changes)?)?,
        SessionRequest::Users => serde_json::json!({ "users": service.users() }),
    };
    Ok(value)
}

fn to_value<T: serde::Serialize>(value: T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|err| AppError::Core(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_request() {
        let request: SessionRequest =
            serde_json::from_str(r#"{"op":"update","id":3,"userId":7,"title":""}"#).unwrap();
        assert_eq!(
            request,
            SessionRequest::Update {
                id: 3,
                changes: UpdateIssue {
                    title: Some(String::new()),
                    description: None,
                    status: None,
                    user_id: Some(7),
                },
            }
        );
    }

    #[test]
    fn test_parse_create_request() {
        let request: SessionRequest =
            serde_json::from_str(r#"{"op":"create","title":"A","description":"d"}"#).unwrap();
        assert_eq!(request, SessionRequest::Create(CreateIssue::new("A", "d")));
    }

    #[test]
    fn test_not_found_reply_carries_id() {
        let error = AppError::Core(issuedesk_core::Error::NotFound(9));
        let response = SessionResponse::from_outcome(Err(error));

        assert!(matches!(response, SessionResponse::Error { .. }));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["code"], "not_found");
        assert_eq!(value["details"]["id"], 9);
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_ok_reply_shape() {
        let response = SessionResponse::from_outcome(Ok(serde_json::json!({ "users": [] })));

        assert!(matches!(response, SessionResponse::Ok { .. }));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok", "result": { "users": [] } }));
    }

    #[test]
    fn test_parse_unknown_op_fails() {
        assert!(serde_json::from_str::<SessionRequest>(r#"{"op":"delete","id":1}"#).is_err());
    }
}
