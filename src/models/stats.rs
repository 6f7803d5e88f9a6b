//! Workout statistics aggregation for the summary and dashboard views.
//!
//! Everything here is computed on demand from a user's [`WorkoutLog`];
//! nothing is cached, so totals always reflect the log as stored.

use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout::WorkoutLog;
use crate::time_utils::date_key;

/// Number of calendar days covered by the weekly stats window.
const WEEKLY_WINDOW_DAYS: u64 = 7;

/// Aggregate totals for one category.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryTotals {
    pub count: u32,
    /// Total minutes
    pub duration: u32,
    pub calories: f64,
}

/// Aggregated workout summary: overall totals, per-category breakdown, and
/// the 7-day duration buckets.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub total_workouts: u32,
    pub total_duration: u32,
    pub total_calories: f64,
    pub by_category: BTreeMap<String, CategoryTotals>,
    /// Calendar date (`YYYY-MM-DD`) mapped to total minutes; always exactly
    /// seven consecutive days ending today, oldest first
    pub weekly_stats: BTreeMap<String, u32>,
}

impl WorkoutSummary {
    /// Aggregate a full log, with weekly buckets anchored at `today`.
    pub fn from_log(log: &WorkoutLog, today: NaiveDate) -> Self {
        let mut summary = Self {
            total_workouts: 0,
            total_duration: 0,
            total_calories: 0.0,
            by_category: BTreeMap::new(),
            weekly_stats: weekly_stats(log, today),
        };

        for (category, entries) in &log.categories {
            let totals = CategoryTotals {
                count: entries.len() as u32,
                duration: entries.iter().map(|e| e.duration).sum(),
                calories: entries.iter().map(|e| e.calories).sum(),
            };

            summary.total_workouts += totals.count;
            summary.total_duration += totals.duration;
            summary.total_calories += totals.calories;
            summary.by_category.insert(category.clone(), totals);
        }

        summary
    }
}

/// Total workout minutes per calendar day over the week ending at `today`.
///
/// The map always holds exactly seven keys, `today - 6` through `today`,
/// each initialized to zero. Entries are bucketed by their local calendar
/// date; anything outside the window is ignored.
pub fn weekly_stats(log: &WorkoutLog, today: NaiveDate) -> BTreeMap<String, u32> {
    let mut buckets: BTreeMap<String, u32> = (0..WEEKLY_WINDOW_DAYS)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| (date_key(date), 0))
        .collect();

    for entry in log.entries() {
        let key = date_key(entry.timestamp.with_timezone(&Local).date_naive());
        if let Some(total) = buckets.get_mut(&key) {
            *total += entry.duration;
        }
    }

    buckets
}

/// A dashboard row for an entry logged within the last seven days.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecentWorkout {
    pub category: String,
    pub exercise: String,
    /// Minutes
    pub duration: u32,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// Entries created within the last seven days (inclusive), flattened
/// across categories for the dashboard.
pub fn recent_workouts(log: &WorkoutLog, now: DateTime<Utc>) -> Vec<RecentWorkout> {
    let mut recent = Vec::new();

    for (category, entries) in &log.categories {
        for entry in entries {
            if now.signed_duration_since(entry.timestamp).num_days() <= 7 {
                recent.push(RecentWorkout {
                    category: category.clone(),
                    exercise: entry.exercise.clone(),
                    duration: entry.duration,
                    date: date_key(entry.timestamp.with_timezone(&Local).date_naive()),
                });
            }
        }
    }

    recent
}
