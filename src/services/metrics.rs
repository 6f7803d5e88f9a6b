// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calorie, BMI and BMR calculators.
//!
//! These are the numeric contracts the rest of the application builds on;
//! stored values come from exactly these functions, so any change here
//! changes what users see historically.

use crate::models::workout::Category;

/// Round to two decimal places, the precision of every stored metric.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calories burned for a workout: `MET × weight × hours`.
///
/// Unknown categories use the default MET rather than failing.
pub fn calories_burned(category: &str, duration_minutes: u32, weight_kg: f64) -> f64 {
    let met = Category::met_for(category);
    round2(met * weight_kg * (f64::from(duration_minutes) / 60.0))
}

/// Body mass index from weight (kg) and height (cm).
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Basal metabolic rate via the Mifflin-St Jeor equation.
///
/// Only "male" (case-insensitive) selects the additive constant; every
/// other gender string uses the subtractive form. The two-way branch is
/// intentional and load-bearing for stored BMR values.
pub fn bmr(weight_kg: f64, height_cm: f64, age: i32, gender: &str) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    if gender.eq_ignore_ascii_case("male") {
        round2(base + 5.0)
    } else {
        round2(base - 161.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_known_categories() {
        // MET 6.0 * 70kg * 1h
        assert_eq!(calories_burned("Workout", 60, 70.0), 420.0);
        // MET 3.0 * 60kg * 0.5h
        assert_eq!(calories_burned("Warm-up", 30, 60.0), 90.0);
        // MET 8.0 * 70kg * 0.5h
        assert_eq!(calories_burned("Cardio", 30, 70.0), 280.0);
    }

    #[test]
    fn test_calories_unknown_category_uses_default_met() {
        // MET 4.0 * 70kg * 1h
        assert_eq!(calories_burned("Parkour", 60, 70.0), 280.0);
    }

    #[test]
    fn test_calories_rounded_to_two_decimals() {
        // 2.5 * 68.3 * (25/60) = 71.145833...
        assert_eq!(calories_burned("Cool-down", 25, 68.3), 71.15);
    }

    #[test]
    fn test_bmi() {
        // 70 / 1.75^2 = 22.857...
        assert_eq!(bmi(70.0, 175.0), 22.86);
        assert_eq!(bmi(60.0, 165.0), 22.04);
    }

    #[test]
    fn test_bmr_male() {
        // 10*75 + 6.25*180 - 5*30 + 5
        assert_eq!(bmr(75.0, 180.0, 30, "male"), 1730.0);
        assert_eq!(bmr(75.0, 180.0, 30, "MALE"), 1730.0);
    }

    #[test]
    fn test_bmr_female() {
        // 10*60 + 6.25*165 - 5*25 - 161
        assert_eq!(bmr(60.0, 165.0, 25, "female"), 1345.25);
    }

    #[test]
    fn test_bmr_unrecognized_gender_uses_subtractive_form() {
        // Any non-"male" string takes the same branch as "female"
        assert_eq!(bmr(60.0, 165.0, 25, "other"), bmr(60.0, 165.0, 25, "female"));
    }
}
