// ABOUTME: Body metric formulas: BMI and Mifflin-St Jeor daily calorie target
// ABOUTME: Pure stateless functions, deterministic for any given input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Metric Calculator Module
//!
//! Stateless formulas turning a user's physical attributes into the two
//! numbers the rest of the engine consumes: body-mass index and the
//! estimated daily calorie target.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use fitplan_core::models::{Goal, Sex};

/// Calorie adjustment applied for a fat-loss or muscle-gain goal (kcal/day)
pub const GOAL_CALORIE_ADJUSTMENT: f64 = 300.0;

/// Calculate body-mass index
///
/// Formula: `BMI = weight_kg / (height_cm / 100)^2`, rounded to two decimal
/// places.
///
/// Inputs are taken as-is: a zero height yields a non-finite value. Supplying
/// positive values is the caller's responsibility.
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 100.0).round() / 100.0
}

/// Calculate the estimated daily calorie target
///
/// Basal metabolic rate via Mifflin-St Jeor (1990):
/// `BMR = (10 x weight_kg) + (6.25 x height_cm) - (5 x age) + offset`
/// with offset +5 for male, -161 otherwise. The goal then shifts the result:
/// fat loss subtracts 300 kcal, muscle gain adds 300 kcal, general leaves it
/// unchanged.
///
/// The result is truncated toward zero, not rounded.
#[must_use]
pub fn daily_calorie_target(age: u32, weight_kg: f64, height_cm: f64, sex: Sex, goal: Goal) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = if sex.is_male() { base + 5.0 } else { base - 161.0 };

    let adjusted = match goal {
        Goal::FatLoss => bmr - GOAL_CALORIE_ADJUSTMENT,
        Goal::MuscleGain => bmr + GOAL_CALORIE_ADJUSTMENT,
        Goal::General => bmr,
    };

    adjusted as i32
}
