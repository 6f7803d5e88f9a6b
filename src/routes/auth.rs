// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration, login and logout routes.

use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_session_token, SESSION_COOKIE};
use crate::models::UserProfile;
use crate::routes::FieldValue;
use crate::services::metrics;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
}

/// Outcome of register and login: a flag, a message, and where the client
/// should navigate next.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AccountResponse {
    pub success: bool,
    pub message: String,
    pub redirect: String,
}

// ─── Registration ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    age: Option<FieldValue>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    height: Option<FieldValue>,
    #[serde(default)]
    weight: Option<FieldValue>,
}

/// Register a new user.
///
/// All seven fields are required; height/weight/age must parse as numbers.
/// BMI and BMR are computed here, once, and stored with the profile.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AccountResponse>> {
    let missing = || AppError::Validation("All fields are required".to_string());

    let username = req.username.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let password = req.password.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let name = req.name.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let gender = req.gender.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let raw_age = req.age.filter(|v| !v.is_blank()).ok_or_else(missing)?;
    let raw_height = req.height.filter(|v| !v.is_blank()).ok_or_else(missing)?;
    let raw_weight = req.weight.filter(|v| !v.is_blank()).ok_or_else(missing)?;

    if state.store.get_user(&username).is_some() {
        return Err(AppError::Conflict);
    }

    let age = raw_age
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(AppError::InvalidNumeric)?;
    let height_cm = raw_height.as_f64().ok_or(AppError::InvalidNumeric)?;
    let weight_kg = raw_weight.as_f64().ok_or(AppError::InvalidNumeric)?;

    let profile = UserProfile {
        bmi: metrics::bmi(weight_kg, height_cm),
        bmr: metrics::bmr(weight_kg, height_cm, age, &gender),
        username: username.clone(),
        password,
        name,
        age,
        gender,
        height_cm,
        weight_kg,
        registered_at: Utc::now(),
    };

    // The store enforces username uniqueness atomically; the check above
    // only exists to order the error ahead of numeric parsing.
    state.store.create_user(profile)?;
    state.store.init_workout_log(&username);

    tracing::info!(username = %username, "User registered");

    Ok(Json(AccountResponse {
        success: true,
        message: "Registration successful".to_string(),
        redirect: "/login".to_string(),
    }))
}

// ─── Login / Logout ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// Log a user in and establish the session cookie.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AccountResponse>)> {
    let missing = || AppError::Validation("Username and password required".to_string());
    let username = req.username.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let password = req.password.filter(|v| !v.is_empty()).ok_or_else(missing)?;

    // Plaintext comparison, matching the stored credential format.
    let user = state
        .store
        .get_user(&username)
        .filter(|u| u.password == password)
        .ok_or(AppError::InvalidCredentials)?;

    let token = create_session_token(&user.username, &state.config.session_signing_key)
        .map_err(AppError::Internal)?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(30))
        .build();

    tracing::info!(username = %user.username, "Login successful");

    Ok((
        jar.add(cookie),
        Json(AccountResponse {
            success: true,
            message: "Login successful".to_string(),
            redirect: "/dashboard".to_string(),
        }),
    ))
}

/// Clear the session cookie and send the client back to the landing page.
/// Idempotent: logging out without a session is fine.
async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let cookie = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(cookie), Redirect::to("/"))
}
