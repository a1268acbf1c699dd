// Rust guideline compliant 2026-10-19

//! User directory boundary.

use crate::models::{User, UserId};
use std::collections::BTreeMap;

/// Read-only lookup of users by identifier.
///
/// Implementations never fail a lookup: an unknown id is `None`.
pub trait UserDirectory: Send + Sync {
    /// Looks up a user by id and returns a snapshot of it.
    fn lookup(&self, id: UserId) -> Option<User>;

    /// Returns every known user ordered by id.
    fn users(&self) -> Vec<User>;
}

/// Directory backed by a fixed set of users.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: BTreeMap<UserId, User>,
}

impl StaticDirectory {
    /// Creates a directory from a list of users.
    ///
    /// A later user with a duplicate id replaces an earlier one.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|user| (user.id, user)).collect(),
        }
    }

    /// Returns the number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if the directory has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for StaticDirectory {
    fn lookup(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }
}
