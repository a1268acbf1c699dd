// Rust guideline compliant 2026-10-19

//! issuedesk Core Library
//!
//! This crate provides the foundational components for the issuedesk tracker:
//! - Data models (Issue, User, Status, update requests)
//! - Status engine (assign-on-create, assign-on-update)
//! - Storage and directory boundaries with in-memory implementations
//! - Seed fixtures and configuration
//! - Error types and result handling

pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod models;
pub mod seed;
pub mod storage;

pub use config::{Config, LogFormat, OutputFormat};
pub use directory::{StaticDirectory, UserDirectory};
pub use engine::{
    apply_update, creation_draft, derive_creation_state, derive_update_state, escalates,
    merge_text, Transition,
};
pub use error::{Error, Result};
pub use models::{CreateIssue, Issue, IssueDraft, IssueId, Status, UpdateIssue, User, UserId};
pub use seed::Seed;
pub use storage::{IssueStore, MemoryStore};
