// ABOUTME: Daily diet generation from the food catalog
// ABOUTME: Applies the diet-plan markers and samples without a fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Daily diet plan generation.
//!
//! Unlike the workout planner there is no fallback: a marker combination
//! that matches nothing yields an empty plan rather than an error.

use fitplan_core::models::{Catalog, FoodRow};
use rand::Rng;

use crate::planner::filters::diet_pool;
use crate::planner::{sample_rows, MAX_PLAN_ROWS};

/// Inputs for diet plan generation
#[derive(Debug, Clone)]
pub struct DietPlanParams {
    /// Resolved diet-plan label, including the preference suffix
    pub diet_plan: String,
    /// Daily calorie target, carried for interface parity; eligibility is
    /// driven by the label markers alone
    pub calorie_target: i32,
}

/// Generate a daily diet of up to [`MAX_PLAN_ROWS`] sampled dishes
pub fn daily_diet<R>(catalog: &Catalog, params: &DietPlanParams, rng: &mut R) -> Vec<FoodRow>
where
    R: Rng + ?Sized,
{
    let pool = diet_pool(catalog.foods(), &params.diet_plan);
    sample_rows(&pool, MAX_PLAN_ROWS, rng)
}
