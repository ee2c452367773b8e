// ABOUTME: Row predicates shared by the daily and weekly planners
// ABOUTME: Keyword matching is case-insensitive; diet markers are case-sensitive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Catalog filter predicates.
//!
//! Equipment and muscle keywords match as case-insensitive substrings of the
//! row field. A missing muscle never matches a keyword. The diet markers are
//! matched case-sensitively against the resolved diet-plan label, so only
//! labels produced by the cluster profiles trigger them.

use fitplan_core::models::{Equipment, FoodRow, WorkoutRow};

use crate::profiles::{BODYWEIGHT_CARDIO, STRENGTH_TRAINING};

/// Diet-plan substring that switches on the calorie cap
pub const LOW_CALORIE_MARKER: &str = "Low-calorie";

/// Diet-plan substring that switches on the protein floor
pub const HIGH_PROTEIN_MARKER: &str = "High-protein";

/// Exclusive calorie cap applied by the low-calorie marker
pub const LOW_CALORIE_LIMIT: f64 = 200.0;

/// Exclusive protein floor applied by the high-protein marker
pub const HIGH_PROTEIN_FLOOR: f64 = 10.0;

/// Equipment keywords for users without equipment
pub(crate) const BODYWEIGHT_KEYWORDS: &[&str] = &["body"];

/// Equipment keywords for dumbbell users
pub(crate) const DUMBBELL_KEYWORDS: &[&str] = &["dumbbell", "body"];

/// Equipment keywords satisfying the bodyweight-and-cardio strategy
pub(crate) const CARDIO_KEYWORDS: &[&str] = &["body", "cardio"];

/// Muscle keywords for upper-body focus days
pub(crate) const UPPER_KEYWORDS: &[&str] =
    &["chest", "back", "shoulder", "biceps", "triceps", "lats"];

/// Muscle keywords for lower-body focus days
pub(crate) const LOWER_KEYWORDS: &[&str] = &["leg", "quadriceps", "hamstrings", "glutes", "calves"];

/// Muscle keywords for core focus days
pub(crate) const CORE_KEYWORDS: &[&str] = &["ab", "core", "oblique"];

/// Case-insensitive substring match against any keyword
pub(crate) fn contains_any(value: &str, keywords: &[&str]) -> bool {
    let lowered = value.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Keyword match over an optional field; a missing field never matches
pub(crate) fn matches_any(field: Option<&str>, keywords: &[&str]) -> bool {
    field.is_some_and(|value| contains_any(value, keywords))
}

/// Whether a workout row is usable with the given equipment
pub(crate) fn equipment_allows(equipment: Equipment, row: &WorkoutRow) -> bool {
    match equipment {
        Equipment::None => contains_any(&row.equipment, BODYWEIGHT_KEYWORDS),
        Equipment::Dumbbells => contains_any(&row.equipment, DUMBBELL_KEYWORDS),
        Equipment::Gym => true,
    }
}

/// Whether a workout row fits the resolved workout strategy
pub(crate) fn strategy_allows(workout_plan: &str, row: &WorkoutRow) -> bool {
    if workout_plan == BODYWEIGHT_CARDIO {
        contains_any(&row.equipment, CARDIO_KEYWORDS)
    } else if workout_plan == STRENGTH_TRAINING {
        row.muscle.is_some()
    } else {
        true
    }
}

/// Bodyweight rows of the full workout table, used as the sampling fallback
pub(crate) fn bodyweight_rows(workouts: &[WorkoutRow]) -> Vec<&WorkoutRow> {
    workouts
        .iter()
        .filter(|row| contains_any(&row.equipment, BODYWEIGHT_KEYWORDS))
        .collect()
}

/// Food rows eligible for a diet-plan label
///
/// Markers apply cumulatively, so a label carrying both restricts by
/// calories and protein. Labels without markers keep every row.
pub(crate) fn diet_pool<'a>(foods: &'a [FoodRow], diet_plan: &str) -> Vec<&'a FoodRow> {
    let mut pool: Vec<&FoodRow> = foods.iter().collect();
    if diet_plan.contains(LOW_CALORIE_MARKER) {
        pool.retain(|food| food.calories < LOW_CALORIE_LIMIT);
    }
    if diet_plan.contains(HIGH_PROTEIN_MARKER) {
        pool.retain(|food| food.protein > HIGH_PROTEIN_FLOOR);
    }
    pool
}
