// ABOUTME: Daily workout generation under hard equipment and strategy constraints
// ABOUTME: Falls back to bodyweight rows when the filtered pool is too small
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Daily workout plan generation.
//!
//! The equipment constraint is applied first, then the strategy filter on
//! what remains. A pool smaller than [`MAX_PLAN_ROWS`] is discarded in favor
//! of the bodyweight rows of the full table, so every user gets a usable
//! plan.

use fitplan_core::models::{Catalog, Equipment, WorkoutRow};
use rand::Rng;

use crate::planner::filters::{bodyweight_rows, equipment_allows, strategy_allows};
use crate::planner::{sample_rows, MAX_PLAN_ROWS};

/// Inputs for workout plan generation
#[derive(Debug, Clone)]
pub struct WorkoutPlanParams {
    /// Resolved workout strategy label
    pub workout_plan: String,
    /// Minutes per day, carried for interface parity; it does not affect
    /// which rows are eligible
    pub time_per_day_min: u32,
    /// Equipment available to the user
    pub equipment: Equipment,
}

/// Generate a daily workout of up to [`MAX_PLAN_ROWS`] sampled rows
pub fn daily_workout<R>(
    catalog: &Catalog,
    params: &WorkoutPlanParams,
    rng: &mut R,
) -> Vec<WorkoutRow>
where
    R: Rng + ?Sized,
{
    let pool = workout_pool(catalog.workouts(), params);
    sample_rows(&pool, MAX_PLAN_ROWS, rng)
}

/// Eligible rows for a daily workout, after fallback
pub(crate) fn workout_pool<'a>(
    workouts: &'a [WorkoutRow],
    params: &WorkoutPlanParams,
) -> Vec<&'a WorkoutRow> {
    let mut pool: Vec<&WorkoutRow> = workouts
        .iter()
        .filter(|row| equipment_allows(params.equipment, row))
        .collect();
    pool.retain(|row| strategy_allows(&params.workout_plan, row));

    if pool.len() < MAX_PLAN_ROWS {
        return bodyweight_rows(workouts);
    }
    pool
}
