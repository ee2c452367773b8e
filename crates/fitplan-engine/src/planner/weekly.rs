// ABOUTME: Weekly plan generation over a fixed upper/lower/core training split
// ABOUTME: Sunday is always a rest day with a synthetic rest row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Weekly workout and diet plan generation.
//!
//! The workout week follows a fixed split: upper body on Monday and
//! Thursday, lower body on Tuesday and Friday, core on Wednesday, full body
//! on Saturday, and rest on Sunday. Each training day is filtered and
//! sampled independently. The weekly diet filters the food catalog once and
//! draws an independent sample for every day.

use fitplan_core::models::{Catalog, DayOfWeek, Equipment, FoodRow, WeeklySchedule, WorkoutRow};
use rand::Rng;

use crate::planner::diet::DietPlanParams;
use crate::planner::filters::{bodyweight_rows, diet_pool, equipment_allows, matches_any};
use crate::planner::filters::{CORE_KEYWORDS, LOWER_KEYWORDS, UPPER_KEYWORDS};
use crate::planner::workout::WorkoutPlanParams;
use crate::planner::{sample_rows, MAX_PLAN_ROWS};

/// Training focus assigned to a day of the split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutFocus {
    /// Chest, back, shoulders, and arms
    Upper,
    /// Legs and glutes
    Lower,
    /// Abdominals and obliques
    Core,
    /// Whole-body day, no muscle filter
    Full,
    /// No training
    Rest,
}

impl WorkoutFocus {
    /// Muscle keywords constraining this focus, if any
    pub(crate) const fn muscle_keywords(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Upper => Some(UPPER_KEYWORDS),
            Self::Lower => Some(LOWER_KEYWORDS),
            Self::Core => Some(CORE_KEYWORDS),
            Self::Full | Self::Rest => None,
        }
    }
}

/// Focus assigned to each day of the week
#[must_use]
pub const fn focus_for(day: DayOfWeek) -> WorkoutFocus {
    match day {
        DayOfWeek::Monday | DayOfWeek::Thursday => WorkoutFocus::Upper,
        DayOfWeek::Tuesday | DayOfWeek::Friday => WorkoutFocus::Lower,
        DayOfWeek::Wednesday => WorkoutFocus::Core,
        DayOfWeek::Saturday => WorkoutFocus::Full,
        DayOfWeek::Sunday => WorkoutFocus::Rest,
    }
}

/// Generate a full training week
///
/// Only the equipment constraint carries over from the daily planner; the
/// strategy label does not narrow the weekly split.
pub fn weekly_workout<R>(
    catalog: &Catalog,
    params: &WorkoutPlanParams,
    rng: &mut R,
) -> WeeklySchedule<WorkoutRow>
where
    R: Rng + ?Sized,
{
    WeeklySchedule::generate(|day| day_workout(catalog, params.equipment, focus_for(day), rng))
}

/// Generate a week of diet plans drawn from one filtered pool
pub fn weekly_diet<R>(
    catalog: &Catalog,
    params: &DietPlanParams,
    rng: &mut R,
) -> WeeklySchedule<FoodRow>
where
    R: Rng + ?Sized,
{
    let pool = diet_pool(catalog.foods(), &params.diet_plan);
    WeeklySchedule::generate(|_| sample_rows(&pool, MAX_PLAN_ROWS, rng))
}

fn day_workout<R>(
    catalog: &Catalog,
    equipment: Equipment,
    focus: WorkoutFocus,
    rng: &mut R,
) -> Vec<WorkoutRow>
where
    R: Rng + ?Sized,
{
    if focus == WorkoutFocus::Rest {
        return vec![WorkoutRow::rest()];
    }
    let pool = focus_pool(catalog.workouts(), equipment, focus);
    sample_rows(&pool, MAX_PLAN_ROWS, rng)
}

/// Eligible rows for one training day, after fallback
pub(crate) fn focus_pool<'a>(
    workouts: &'a [WorkoutRow],
    equipment: Equipment,
    focus: WorkoutFocus,
) -> Vec<&'a WorkoutRow> {
    let mut pool: Vec<&WorkoutRow> = workouts
        .iter()
        .filter(|row| equipment_allows(equipment, row))
        .collect();
    if let Some(keywords) = focus.muscle_keywords() {
        pool.retain(|row| matches_any(row.muscle.as_deref(), keywords));
    }

    if pool.len() < MAX_PLAN_ROWS {
        return bodyweight_rows(workouts);
    }
    pool
}
