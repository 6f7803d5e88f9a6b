// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Concurrent in-memory store for user profiles and workout logs.
//!
//! Single source of truth for all mutable state, keyed by username. The
//! `DashMap` entry guards make each mutation atomic per key: two concurrent
//! registrations for one username cannot both succeed, and concurrent
//! workout appends for one user cannot drop entries. A durable backend can
//! replace this behind the same methods without touching the handlers.
//! Nothing survives a process restart.

use crate::error::AppError;
use crate::models::{UserProfile, WorkoutEntry, WorkoutLog, WorkoutSummary};
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Shared in-memory store. Cloning is cheap and clones see the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<String, UserProfile>>,
    workouts: Arc<DashMap<String, WorkoutLog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Insert a new user.
    ///
    /// Fails with `Conflict` when the username is taken; the existing
    /// record is left untouched.
    pub fn create_user(&self, profile: UserProfile) -> Result<(), AppError> {
        match self.users.entry(profile.username.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(profile);
                Ok(())
            }
        }
    }

    /// Look up a user by username.
    pub fn get_user(&self, username: &str) -> Option<UserProfile> {
        self.users.get(username).map(|user| user.value().clone())
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// Seed an empty workout log with all known categories.
    pub fn init_workout_log(&self, username: &str) {
        self.workouts
            .insert(username.to_string(), WorkoutLog::seeded());
    }

    /// Append an entry to the user's log.
    ///
    /// The log and the entry's category list are created lazily if absent.
    pub fn append_workout(&self, username: &str, entry: WorkoutEntry) {
        self.workouts
            .entry(username.to_string())
            .or_insert_with(WorkoutLog::seeded)
            .append(entry);
    }

    /// The user's full log, or an empty one when nothing was stored.
    pub fn workout_log(&self, username: &str) -> WorkoutLog {
        self.workouts
            .get(username)
            .map(|log| log.value().clone())
            .unwrap_or_default()
    }

    /// Aggregated totals and weekly buckets for the user's log, with the
    /// weekly window anchored at `today`.
    pub fn summary_for(&self, username: &str, today: NaiveDate) -> WorkoutSummary {
        WorkoutSummary::from_log(&self.workout_log(username), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_profile(username: &str) -> UserProfile {
        UserProfile {
            username: username.to_string(),
            password: "password123".to_string(),
            name: "Test User".to_string(),
            age: 30,
            gender: "female".to_string(),
            height_cm: 165.0,
            weight_kg: 60.0,
            bmi: 22.04,
            bmr: 1345.25,
            registered_at: Utc::now(),
        }
    }

    fn make_entry(category: &str, duration: u32) -> WorkoutEntry {
        WorkoutEntry {
            exercise: "Running".to_string(),
            duration,
            category: category.to_string(),
            timestamp: Utc::now(),
            calories: 100.0,
        }
    }

    #[test]
    fn test_create_user_rejects_duplicate() {
        let store = MemoryStore::new();

        store.create_user(make_profile("alice")).unwrap();

        let mut second = make_profile("alice");
        second.name = "Someone Else".to_string();
        let err = store.create_user(second).unwrap_err();
        assert!(matches!(err, AppError::Conflict));

        // First registration is unchanged
        assert_eq!(store.get_user("alice").unwrap().name, "Test User");
    }

    #[test]
    fn test_workout_log_lazy_creation() {
        let store = MemoryStore::new();

        // No init call; the log and category list appear on first append
        store.append_workout("bob", make_entry("Parkour", 20));

        let log = store.workout_log("bob");
        assert_eq!(log.categories["Parkour"].len(), 1);
        // Known categories were seeded alongside
        assert!(log.categories.contains_key("Cardio"));
    }

    #[test]
    fn test_workout_log_absent_user_is_empty() {
        let store = MemoryStore::new();
        assert!(store.workout_log("nobody").categories.is_empty());
    }

    #[test]
    fn test_summary_for_totals() {
        let store = MemoryStore::new();
        store.init_workout_log("alice");
        for duration in [30, 15, 20] {
            store.append_workout("alice", make_entry("Cardio", duration));
        }

        let today = chrono::Local::now().date_naive();
        let summary = store.summary_for("alice", today);
        assert_eq!(summary.total_workouts, 3);
        assert_eq!(summary.total_duration, 65);
    }

    #[test]
    fn test_concurrent_appends_do_not_drop_entries() {
        let store = MemoryStore::new();
        store.init_workout_log("alice");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.append_workout("alice", make_entry("Cardio", 10));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.workout_log("alice").categories["Cardio"].len(), 400);
    }

    #[test]
    fn test_concurrent_registration_single_winner() {
        let store = MemoryStore::new();

        let successes: usize = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.create_user(make_profile("carol")).is_ok())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| usize::from(handle.join().unwrap()))
            .sum();

        assert_eq!(successes, 1);
    }
}
