// ABOUTME: Hybrid recommendation resolution from cluster profile plus user overrides
// ABOUTME: Equipment and goal can override the cluster's baseline workout strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Resolves a cluster assignment into a concrete recommendation.
//!
//! The cluster profile provides the baseline strategy. Two user-level
//! overrides apply on top, in order:
//! 1. No equipment forces the bodyweight strategy, regardless of goal
//! 2. Gym access combined with a muscle-gain goal forces strength training
//!
//! The diet plan is the profile's diet family plus a dietary-preference
//! suffix.

use fitplan_core::models::{DietPreference, Equipment, Goal, Recommendation};

use fitplan_core::errors::AppResult;

use crate::profiles::{profile_for, BODYWEIGHT_CARDIO, STRENGTH_TRAINING};

/// Inputs for resolving a recommendation
#[derive(Debug, Clone, Copy)]
pub struct ResolveParams {
    /// Cluster id assigned by the model
    pub cluster_id: u32,
    /// Daily calorie target carried into the recommendation
    pub daily_calories: i32,
    /// Minutes per day the user can train
    pub time_per_day_min: u32,
    /// User's stated goal
    pub goal: Goal,
    /// Equipment available to the user
    pub equipment: Equipment,
    /// Dietary preference controlling the diet-plan suffix
    pub diet_pref: DietPreference,
}

/// Resolve the cluster profile and user overrides into a recommendation
///
/// # Errors
///
/// Returns an unknown-cluster error when the cluster id is out of range.
pub fn resolve(params: ResolveParams) -> AppResult<Recommendation> {
    let profile = profile_for(params.cluster_id)?;

    // The no-equipment override is checked first and wins over the
    // gym/muscle-gain override.
    let workout_plan = if params.equipment == Equipment::None {
        BODYWEIGHT_CARDIO
    } else if params.equipment == Equipment::Gym && params.goal == Goal::MuscleGain {
        STRENGTH_TRAINING
    } else {
        profile.workout_type
    };

    let suffix = match params.diet_pref {
        DietPreference::Veg => " (Veg)",
        DietPreference::NonVeg => " (Non-Veg)",
    };
    let diet_plan = format!("{}{suffix}", profile.diet_type);

    Ok(Recommendation {
        fitness_goal: profile.goal_label.to_owned(),
        workout_plan: workout_plan.to_owned(),
        diet_plan,
        daily_calories: params.daily_calories,
        time_per_day: params.time_per_day_min,
    })
}
