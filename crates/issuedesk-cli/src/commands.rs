// Rust guideline compliant 2026-10-19

//! Command implementations for the issuedesk CLI.

pub mod create;
pub mod list;
pub mod session;
pub mod show;
pub mod update;
pub mod users;
