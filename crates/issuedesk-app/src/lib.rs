// Rust guideline compliant 2026-10-19

//! Shared application services for issuedesk.
//!
//! This crate provides the issue service used by every front end, list
//! filtering and error codes.

pub mod error;
pub mod list;
pub mod service;
pub mod time;

pub use error::{AppError, ErrorCode, Result};
pub use list::{filter_issues, parse_status, ListOptions};
pub use service::{IssueService, MemoryIssueService};
pub use time::{fixed_clock, system_clock, Clock};
