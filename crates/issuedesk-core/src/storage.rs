// Rust guideline compliant 2026-10-19

//! Issue storage boundary and the in-memory store.
//!
//! The store is the source of truth for issue records. It assigns
//! identifiers and creation timestamps; everything else about an issue is
//! decided by the status engine before the record reaches the store.

use crate::models::{Issue, IssueDraft, IssueId};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Storage for issue records.
///
/// Mutating methods take `&mut self`; callers that share a store serialize
/// access around it, which also serializes read-modify-write sequences.
pub trait IssueStore: Send {
    /// Loads a single issue by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no issue has this id.
    fn get(&self, id: IssueId) -> Result<Issue>;

    /// Loads all issues in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn list(&self) -> Result<Vec<Issue>>;

    /// Inserts a new issue, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if no id is left or the backing storage cannot be
    /// written.
    fn insert(&mut self, draft: IssueDraft, now: DateTime<Utc>) -> Result<Issue>;

    /// Replaces an existing issue with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no issue has this id.
    fn replace(&mut self, issue: Issue) -> Result<Issue>;
}

/// In-memory store that lives for the process lifetime.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    issues: Vec<Issue>,
    /// `None` once the id after `u64::MAX` would be needed.
    next_id: Option<IssueId>,
}

impl MemoryStore {
    /// Creates an empty store. The first issue gets id 1.
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Creates a store holding existing issues.
    ///
    /// New ids continue after the largest existing id.
    ///
    /// # Errors
    ///
    /// Returns an error if two issues share an id or the largest id leaves
    /// no room for another issue.
    pub fn with_issues(mut issues: Vec<Issue>) -> Result<Self> {
        issues.sort_by_key(|issue| issue.id);
        if let Some(pair) = issues.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(Error::InvalidIssue(format!(
                "Duplicate issue id: {}",
                pair[0].id
            )));
        }

        let next_id = match issues.last() {
            Some(last) => last.id.checked_add(1).ok_or_else(|| {
                Error::InvalidIssue(format!("Issue id {} leaves no room for new ids", last.id))
            })?,
            None => 1,
        };
        Ok(Self {
            issues,
            next_id: Some(next_id),
        })
    }

    fn position(&self, id: IssueId) -> Result<usize> {
        self.issues
            .binary_search_by_key(&id, |issue| issue.id)
            .map_err(|_| Error::NotFound(id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueStore for MemoryStore {
    fn get(&self, id: IssueId) -> Result<Issue> {
        let pos = self.position(id)?;
        Ok(self.issues[pos].clone())
    }

    fn list(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.clone())
    }

    fn insert(&mut self, draft: IssueDraft, now: DateTime<Utc>) -> Result<Issue> {
        let id = self
            .next_id
            .ok_or_else(|| Error::InvalidIssue("Issue ids exhausted".to_string()))?;
        let issue = Issue {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            user: draft.user,
            created_at: now,
            updated_at: now,
        };
        self.next_id = id.checked_add(1);
        self.issues.push(issue.clone());
        Ok(issue)
    }

    fn replace(&mut self, issue: Issue) -> Result<Issue> {
        let pos = self.position(issue.id)?;
        self.issues[pos] = issue.clone();
        Ok(issue)
    }
}
