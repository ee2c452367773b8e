// ABOUTME: Plan generation from the workout and food catalogs
// ABOUTME: Filters rows by equipment, strategy, and diet markers, then samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Daily and weekly plan generation.
//!
//! Plans are built in two steps: filter the catalog down to an eligible
//! pool, then sample up to [`MAX_PLAN_ROWS`] rows without replacement.
//! Filtering is deterministic; only the sampling step consumes randomness.

pub mod diet;
pub mod filters;
pub mod weekly;
pub mod workout;

pub use diet::{daily_diet, DietPlanParams};
pub use weekly::{weekly_diet, weekly_workout, WorkoutFocus};
pub use workout::{daily_workout, WorkoutPlanParams};

use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on rows per generated plan
pub const MAX_PLAN_ROWS: usize = 5;

/// Sample up to `limit` rows from a pool without replacement
///
/// Pools smaller than `limit` are returned in full.
pub(crate) fn sample_rows<T, R>(pool: &[&T], limit: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, limit)
        .map(|row| (*row).clone())
        .collect()
}
