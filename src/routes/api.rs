// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::stats::{recent_workouts, RecentWorkout, WorkoutSummary};
use crate::models::{Category, DietPlan, UserProfile, WorkoutEntry, WorkoutLog};
use crate::routes::FieldValue;
use crate::services::{diet, metrics};
use crate::AppState;

/// Weight assumed for calorie estimates when the acting user has no
/// stored profile.
const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Fixed "moderate activity" multiplier applied to BMR for the daily
/// calorie target.
const ACTIVITY_MULTIPLIER: f64 = 1.55;

// Defaults for diet guidance when the profile is missing.
const FALLBACK_BMR: f64 = 1800.0;
const FALLBACK_BMI: f64 = 22.0;

/// API routes (require a session).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(log_workout))
        .route("/api/workouts/summary", get(workout_summary))
        .route("/api/dashboard", get(dashboard))
        .route("/api/diet", get(diet_guidance))
}

// ─── Workout Logging ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LogWorkoutRequest {
    #[serde(default)]
    exercise: Option<String>,
    #[serde(default)]
    duration: Option<FieldValue>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogWorkoutResponse {
    pub success: bool,
    pub message: String,
    /// The stored entry, including the computed calories
    pub workout: WorkoutEntry,
}

/// Log a workout for the acting user.
///
/// Calories are computed from the user's stored weight at this moment and
/// fixed on the entry. Category defaults to "Workout"; unknown categories
/// are stored verbatim.
async fn log_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<Json<LogWorkoutResponse>> {
    let missing = || AppError::Validation("Exercise and duration required".to_string());
    let exercise = req.exercise.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let raw_duration = req.duration.ok_or_else(missing)?;

    let duration = raw_duration
        .as_i64()
        .filter(|d| *d > 0)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or(AppError::InvalidDuration)?;

    let category = req
        .category
        .unwrap_or_else(|| Category::Workout.name().to_string());

    let weight_kg = state
        .store
        .get_user(&user.username)
        .map_or(DEFAULT_WEIGHT_KG, |u| u.weight_kg);

    let entry = WorkoutEntry {
        calories: metrics::calories_burned(&category, duration, weight_kg),
        exercise,
        duration,
        category,
        timestamp: Utc::now(),
    };

    state.store.append_workout(&user.username, entry.clone());

    tracing::info!(
        username = %user.username,
        category = %entry.category,
        duration = entry.duration,
        "Workout logged"
    );

    Ok(Json(LogWorkoutResponse {
        success: true,
        message: "Workout logged successfully".to_string(),
        workout: entry,
    }))
}

// ─── Workout Listing & Summary ───────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ListWorkoutsResponse {
    pub success: bool,
    /// Category name mapped to entries in insertion order
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<string, WorkoutEntry[]>")
    )]
    pub workouts: WorkoutLog,
}

/// All of the acting user's workouts, grouped by category.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<ListWorkoutsResponse> {
    Json(ListWorkoutsResponse {
        success: true,
        workouts: state.store.workout_log(&user.username),
    })
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: WorkoutSummary,
}

/// Aggregate totals plus the 7-day duration buckets, anchored at today.
async fn workout_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        success: true,
        summary: state
            .store
            .summary_for(&user.username, Local::now().date_naive()),
    })
}

// ─── Dashboard ───────────────────────────────────────────────

/// Profile fields exposed to the dashboard (no credential).
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileSnapshot {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub bmr: f64,
}

impl From<UserProfile> for ProfileSnapshot {
    fn from(user: UserProfile) -> Self {
        Self {
            name: user.name,
            age: user.age,
            gender: user.gender,
            height: user.height_cm,
            weight: user.weight_kg,
            bmi: user.bmi,
            bmr: user.bmr,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardResponse {
    pub success: bool,
    pub user: Option<ProfileSnapshot>,
    pub total_workouts: u32,
    /// Total minutes across all categories
    pub total_duration: u32,
    /// Entries from the last 7 days, annotated with their calendar date
    pub recent_workouts: Vec<RecentWorkout>,
}

/// Dashboard view-model: profile snapshot, lifetime totals, and recent
/// entries.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<DashboardResponse> {
    let log = state.store.workout_log(&user.username);

    let total_workouts = log.entries().count() as u32;
    let total_duration = log.entries().map(|e| e.duration).sum();

    Json(DashboardResponse {
        success: true,
        user: state.store.get_user(&user.username).map(Into::into),
        total_workouts,
        total_duration,
        recent_workouts: recent_workouts(&log, Utc::now()),
    })
}

// ─── Diet Guidance ───────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DietResponse {
    pub success: bool,
    /// Daily calorie target: BMR scaled by the activity multiplier
    pub daily_calories: u32,
    pub plan: DietPlan,
}

/// Daily calorie target and macro plan for the acting user.
async fn diet_guidance(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<DietResponse> {
    let profile = state.store.get_user(&user.username);
    let bmr = profile.as_ref().map_or(FALLBACK_BMR, |u| u.bmr);
    let bmi = profile.as_ref().map_or(FALLBACK_BMI, |u| u.bmi);

    let daily_calories = (bmr * ACTIVITY_MULTIPLIER).round() as u32;

    Json(DietResponse {
        success: true,
        daily_calories,
        plan: diet::diet_plan(daily_calories, bmi),
    })
}
