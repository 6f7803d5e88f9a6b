// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout categories, entries, and the per-user workout log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// MET value applied when a logged category is not one of the known six.
pub const DEFAULT_MET: f64 = 4.0;

/// The known workout categories, each with a fixed MET (metabolic
/// equivalent) constant for calorie estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WarmUp,
    Workout,
    CoolDown,
    Cardio,
    Strength,
    Flexibility,
}

impl Category {
    /// All known categories, in the order a fresh log is seeded.
    pub const ALL: [Category; 6] = [
        Category::WarmUp,
        Category::Workout,
        Category::CoolDown,
        Category::Cardio,
        Category::Strength,
        Category::Flexibility,
    ];

    /// Canonical display name; also the key under which entries are stored.
    pub fn name(self) -> &'static str {
        match self {
            Category::WarmUp => "Warm-up",
            Category::Workout => "Workout",
            Category::CoolDown => "Cool-down",
            Category::Cardio => "Cardio",
            Category::Strength => "Strength",
            Category::Flexibility => "Flexibility",
        }
    }

    /// MET constant for this category.
    pub fn met(self) -> f64 {
        match self {
            Category::WarmUp => 3.0,
            Category::Workout => 6.0,
            Category::CoolDown => 2.5,
            Category::Cardio => 8.0,
            Category::Strength => 5.0,
            Category::Flexibility => 2.5,
        }
    }

    /// Look up a known category by its exact name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// MET for an arbitrary category name.
    ///
    /// Unknown names fall back to [`DEFAULT_MET`]; they are still legal to
    /// log and are stored under their verbatim name.
    pub fn met_for(name: &str) -> f64 {
        Category::from_name(name).map_or(DEFAULT_MET, Category::met)
    }
}

/// A single logged workout.
///
/// Entries are immutable once stored. Calories are fixed at creation time
/// from the owner's weight at that moment and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutEntry {
    /// Exercise name, free text
    pub exercise: String,
    /// Duration in minutes (always positive)
    pub duration: u32,
    /// Category name as logged (may be outside the known set)
    pub category: String,
    /// Creation instant
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub timestamp: DateTime<Utc>,
    /// Calories burned, computed when the entry was logged
    pub calories: f64,
}

/// Per-user workout log: category name mapped to entries in insertion
/// (= chronological) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutLog {
    pub categories: BTreeMap<String, Vec<WorkoutEntry>>,
}

impl WorkoutLog {
    /// A log with all six known categories present and empty.
    pub fn seeded() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| (c.name().to_string(), Vec::new()))
            .collect();
        Self { categories }
    }

    /// Append an entry, creating its category list if absent.
    pub fn append(&mut self, entry: WorkoutEntry) {
        self.categories
            .entry(entry.category.clone())
            .or_default()
            .push(entry);
    }

    /// Iterate over every entry across all categories.
    pub fn entries(&self) -> impl Iterator<Item = &WorkoutEntry> {
        self.categories.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(category: &str, duration: u32) -> WorkoutEntry {
        WorkoutEntry {
            exercise: "Running".to_string(),
            duration,
            category: category.to_string(),
            timestamp: Utc::now(),
            calories: 0.0,
        }
    }

    #[test]
    fn test_met_lookup() {
        assert_eq!(Category::met_for("Cardio"), 8.0);
        assert_eq!(Category::met_for("Cool-down"), 2.5);
        // Unknown categories fall back rather than fail
        assert_eq!(Category::met_for("Parkour"), DEFAULT_MET);
        // Lookup is exact, not case-insensitive
        assert_eq!(Category::met_for("cardio"), DEFAULT_MET);
    }

    #[test]
    fn test_seeded_log_has_all_categories() {
        let log = WorkoutLog::seeded();

        assert_eq!(log.categories.len(), 6);
        for category in Category::ALL {
            let entries = log.categories.get(category.name());
            assert!(entries.is_some_and(Vec::is_empty));
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut log = WorkoutLog::seeded();
        for duration in [30, 15, 20] {
            log.append(make_entry("Cardio", duration));
        }

        let durations: Vec<u32> = log.categories["Cardio"].iter().map(|e| e.duration).collect();
        assert_eq!(durations, vec![30, 15, 20]);
    }

    #[test]
    fn test_append_creates_unknown_category() {
        let mut log = WorkoutLog::seeded();
        log.append(make_entry("Parkour", 25));

        assert_eq!(log.categories.len(), 7);
        assert_eq!(log.categories["Parkour"].len(), 1);
    }
}
