// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Diet plan generation: macro split plus BMI-band recommendations.

use crate::models::diet::DietPlan;

// Fixed 30/40/30 calorie split across the macros.
const PROTEIN_RATIO: f64 = 0.30;
const CARBS_RATIO: f64 = 0.40;
const FATS_RATIO: f64 = 0.30;

// kcal per gram
const PROTEIN_KCAL_PER_G: f64 = 4.0;
const CARBS_KCAL_PER_G: f64 = 4.0;
const FATS_KCAL_PER_G: f64 = 9.0;

// WHO BMI band boundaries
const UNDERWEIGHT_BMI: f64 = 18.5;
const OVERWEIGHT_BMI: f64 = 25.0;

/// Build the daily macro targets and guidance for a calorie target and BMI.
pub fn diet_plan(daily_calories: u32, bmi: f64) -> DietPlan {
    let calories = f64::from(daily_calories);

    let recommendations = if bmi < UNDERWEIGHT_BMI {
        vec![
            "Focus on nutrient-dense, high-calorie foods".to_string(),
            "Include healthy fats and complex carbs".to_string(),
        ]
    } else if bmi < OVERWEIGHT_BMI {
        vec![
            "Maintain balanced diet with all macros".to_string(),
            "Stay hydrated and eat regular meals".to_string(),
        ]
    } else {
        vec![
            "Reduce processed foods and added sugars".to_string(),
            "Increase protein and fiber intake".to_string(),
        ]
    };

    DietPlan {
        protein: (calories * PROTEIN_RATIO / PROTEIN_KCAL_PER_G).round() as u32,
        carbs: (calories * CARBS_RATIO / CARBS_KCAL_PER_G).round() as u32,
        fats: (calories * FATS_RATIO / FATS_KCAL_PER_G).round() as u32,
        recommendations,
    }
}
