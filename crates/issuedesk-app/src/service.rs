// Rust guideline compliant 2026-10-19

//! Issue service: the create/update/get/list surface over a store and a
//! user directory.

use crate::error::{AppError, Result};
use crate::list::{filter_issues, ListOptions};
use crate::time::{system_clock, Clock};
use issuedesk_core::{
    apply_update, creation_draft, engine, Config, CreateIssue, Issue, IssueId, IssueStore,
    MemoryStore, Seed, StaticDirectory, UpdateIssue, User, UserDirectory,
};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info};

/// Service backed by the in-memory store and a static directory.
pub type MemoryIssueService = IssueService<MemoryStore, StaticDirectory>;

/// Issue API over any store and directory.
///
/// Every mutation runs under the store lock, from reading the existing issue
/// to writing the merged one. Two updates of the same issue therefore never
/// observe the same pre-update assignee.
pub struct IssueService<S, D> {
    store: Mutex<S>,
    directory: D,
    clock: Clock,
    latency: Duration,
}

impl<S, D> IssueService<S, D>
where
    S: IssueStore,
    D: UserDirectory,
{
    /// Creates a service over a store and a directory.
    pub fn new(store: S, directory: D) -> Self {
        Self {
            store: Mutex::new(store),
            directory,
            clock: system_clock(),
            latency: Duration::ZERO,
        }
    }

    /// Replaces the clock used for timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Adds a fixed delay before every issue operation.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Lists issues matching `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_issues(&self, options: &ListOptions) -> Result<Vec<Issue>> {
        self.simulate_latency();
        let issues = self.lock_store()?.list()?;
        Ok(filter_issues(issues, options))
    }

    /// Loads a single issue.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no issue has this id.
    pub fn get_issue(&self, id: IssueId) -> Result<Issue> {
        self.simulate_latency();
        Ok(self.lock_store()?.get(id)?)
    }

    /// Creates an issue.
    ///
    /// The initial status is `IN_PROGRESS` when an assignee is requested and
    /// `PENDING` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title is empty
    /// - The store rejects the insert
    pub fn create_issue(&self, request: CreateIssue) -> Result<Issue> {
        request.validate()?;
        self.simulate_latency();

        let requested_user = request.user_id;
        let draft = creation_draft(request, &self.directory);
        self.log_lookup_miss(requested_user, draft.user.as_ref());

        let now = (self.clock)();
        let issue = self.lock_store()?.insert(draft, now)?;
        info!(
            issue_id = issue.id,
            status = %issue.status,
            assigned = issue.user.is_some(),
            "created issue"
        );
        Ok(issue)
    }

    /// Updates an issue.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no issue has this id; nothing is written
    /// in that case.
    pub fn update_issue(&self, id: IssueId, request: &UpdateIssue) -> Result<Issue> {
        self.simulate_latency();

        let mut store = self.lock_store()?;
        let existing = store.get(id)?;
        let previous_status = existing.status;
        if engine::escalates(&existing, request) {
            debug!(issue_id = id, "first assignment of pending issue, escalating");
        }

        let now = (self.clock)();
        let updated = apply_update(existing, request, &self.directory, now);
        self.log_lookup_miss(request.user_id, updated.user.as_ref());

        let updated = store.replace(updated)?;
        drop(store);

        info!(
            issue_id = id,
            from = %previous_status,
            to = %updated.status,
            assigned = updated.user.is_some(),
            "updated issue"
        );
        Ok(updated)
    }

    /// Returns every user known to the directory.
    pub fn users(&self) -> Vec<User> {
        self.directory.users()
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("issue store lock poisoned".to_string()))
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }

    fn log_lookup_miss(&self, requested: Option<u64>, resolved: Option<&User>) {
        if let (Some(user_id), None) = (requested, resolved) {
            debug!(user_id, "user not found in directory, leaving issue unassigned");
        }
    }
}

impl MemoryIssueService {
    /// Builds an in-memory service from a seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed contains duplicate issue ids.
    pub fn from_seed(seed: Seed) -> Result<Self> {
        let (store, directory) = seed.into_backend()?;
        Ok(Self::new(store, directory))
    }

    /// Builds an in-memory service as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        let seed = Seed::resolve(config.seed_path.as_deref())?;
        Ok(Self::from_seed(seed)?
            .with_latency(Duration::from_millis(config.simulated_latency_ms)))
    }
}
