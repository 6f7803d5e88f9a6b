//! Diet plan model.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Daily macronutrient targets plus guidance for the user's BMI band.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DietPlan {
    /// Grams of protein per day
    pub protein: u32,
    /// Grams of carbohydrates per day
    pub carbs: u32,
    /// Grams of fat per day
    pub fats: u32,
    /// Guidance strings for the BMI band, never empty
    pub recommendations: Vec<String>,
}
