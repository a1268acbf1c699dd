// Rust guideline compliant 2026-10-19

//! Property-based tests for the status engine.
//!
//! These tests validate properties that hold across all statuses, assignees
//! and update requests.

use chrono::{TimeZone, Utc};
use issuedesk_core::{
    apply_update, derive_creation_state, derive_update_state, escalates, Issue, StaticDirectory,
    Status, UpdateIssue, User,
};
use proptest::prelude::*;

/// Users 1..=5 exist; anything else misses.
fn directory() -> StaticDirectory {
    StaticDirectory::new((1..=5).map(|id| User::new(id, format!("user-{id}"))))
}

/// Generates arbitrary Status values.
fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Pending),
        Just(Status::InProgress),
        Just(Status::Completed),
        Just(Status::Cancelled),
    ]
}

/// Generates an optional user id, hitting and missing the directory.
fn arb_user_id() -> impl Strategy<Value = Option<u64>> {
    prop::option::of(0u64..10)
}

fn arb_issue() -> impl Strategy<Value = Issue> {
    (arb_status(), prop::option::of(1u64..=5), "[a-z ]{1,20}", "[a-z ]{0,40}").prop_map(
        |(status, user_id, title, description)| {
            let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
            Issue {
                id: 1,
                title,
                description,
                status,
                user: user_id.map(|id| User::new(id, format!("user-{id}"))),
                created_at: at,
                updated_at: at,
            }
        },
    )
}

fn arb_update() -> impl Strategy<Value = UpdateIssue> {
    (
        prop::option::of("[a-z]{0,10}"),
        prop::option::of("[a-z]{0,10}"),
        prop::option::of(arb_status()),
        arb_user_id(),
    )
        .prop_map(|(title, description, status, user_id)| UpdateIssue {
            title,
            description,
            status,
            user_id,
        })
}

proptest! {
    /// Creation status depends only on whether an assignee was requested.
    #[test]
    fn prop_creation_status_follows_request(user_id in arb_user_id()) {
        let result = derive_creation_state(user_id, &directory());
        match user_id {
            Some(id) => {
                prop_assert_eq!(result.status, Status::InProgress);
                prop_assert_eq!(result.user.map(|u| u.id), directory_hit(id));
            }
            None => {
                prop_assert_eq!(result.status, Status::Pending);
                prop_assert!(result.user.is_none());
            }
        }
    }

    /// Escalation fires exactly on first assignment of a pending issue.
    #[test]
    fn prop_escalation_guard(existing in arb_issue(), request in arb_update()) {
        let result = derive_update_state(&existing, &request, &directory());
        let eligible = existing.user.is_none()
            && request.user_id.is_some()
            && existing.status == Status::Pending;

        if eligible {
            prop_assert_eq!(result.status, Status::InProgress);
        } else {
            prop_assert_eq!(result.status, request.status.unwrap_or(existing.status));
        }
    }

    /// Without an explicit status the engine never moves an issue to Pending.
    #[test]
    fn prop_never_demotes(existing in arb_issue(), user_id in arb_user_id()) {
        let request = UpdateIssue { user_id, ..UpdateIssue::default() };
        let result = derive_update_state(&existing, &request, &directory());
        if existing.status != Status::Pending {
            prop_assert_ne!(result.status, Status::Pending);
        }
    }

    /// Applying the same update twice gives the same status and assignee
    /// when neither application is a first assignment.
    #[test]
    fn prop_repeated_update_is_stable(existing in arb_issue(), request in arb_update()) {
        let directory = directory();
        let later = existing.updated_at + chrono::Duration::seconds(1);
        prop_assume!(!escalates(&existing, &request));
        let once = apply_update(existing, &request, &directory, later);
        prop_assume!(!escalates(&once, &request));
        let twice = apply_update(once.clone(), &request, &directory, later);
        prop_assert_eq!(once, twice);
    }

    /// Text fields only change when the update value is non-empty.
    #[test]
    fn prop_text_merge(existing in arb_issue(), request in arb_update()) {
        let updated = apply_update(existing.clone(), &request, &directory(), existing.updated_at);
        match request.title.as_deref() {
            Some(title) if !title.is_empty() => prop_assert_eq!(&updated.title, title),
            _ => prop_assert_eq!(&updated.title, &existing.title),
        }
        match request.description.as_deref() {
            Some(description) if !description.is_empty() => {
                prop_assert_eq!(&updated.description, description)
            }
            _ => prop_assert_eq!(&updated.description, &existing.description),
        }
        prop_assert_eq!(updated.id, existing.id);
        prop_assert_eq!(updated.created_at, existing.created_at);
    }
}

fn directory_hit(id: u64) -> Option<u64> {
    (1..=5).contains(&id).then_some(id)
}
