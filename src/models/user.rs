//! User profile model.

use chrono::{DateTime, Utc};

/// Registered user profile.
///
/// Created once at registration and never mutated or deleted; BMI and BMR
/// are computed from the registration values and stored alongside them.
///
/// The password is kept in plaintext and compared with string equality.
/// That is a known hardening gap (no hashing, no login rate limiting) that
/// is tracked for a future release; changing it alters the stored format.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Unique identifier, immutable
    pub username: String,
    /// Plaintext credential (see above)
    pub password: String,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Self-reported gender; only "male" (case-insensitive) changes the
    /// BMR formula
    pub gender: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body mass index, two decimal places
    pub bmi: f64,
    /// Basal metabolic rate (Mifflin-St Jeor), two decimal places
    pub bmr: f64,
    /// Registration instant
    pub registered_at: DateTime<Utc>,
}
