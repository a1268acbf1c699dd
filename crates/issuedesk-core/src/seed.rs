// Rust guideline compliant 2026-10-19

//! Seed fixtures for the in-memory backend.

use crate::directory::StaticDirectory;
use crate::models::{Issue, User};
use crate::storage::MemoryStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../data/demo_seed.json");

/// Initial users and issues for a process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Users available to the directory.
    #[serde(default)]
    pub users: Vec<User>,
    /// Issues present before the first request.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Seed {
    /// Returns the demo seed bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture cannot be parsed.
    pub fn builtin() -> Result<Self> {
        Ok(serde_json::from_str(BUILTIN_SEED)?)
    }

    /// Loads a seed from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON document with `users` and `issues`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a valid seed document
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads the seed at `path`, or the builtin seed when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen seed cannot be loaded.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Splits the seed into a store and a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if two seeded issues share an id.
    pub fn into_backend(self) -> Result<(MemoryStore, StaticDirectory)> {
        let store = MemoryStore::with_issues(self.issues)?;
        let directory = StaticDirectory::new(self.users);
        Ok((store, directory))
    }
}
