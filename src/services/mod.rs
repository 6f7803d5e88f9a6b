// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the pure domain calculators.

pub mod diet;
pub mod metrics;

pub use diet::diet_plan;
pub use metrics::{bmi, bmr, calories_burned};
