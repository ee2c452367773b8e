// ABOUTME: End-to-end plan assembly from a user profile
// ABOUTME: Chains metrics, cluster prediction, recommendation, and the planners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! The plan engine ties the pipeline together:
//!
//! 1. Derive BMI and the daily calorie target from the profile
//! 2. Predict the user's cluster from the numeric features
//! 3. Resolve the cluster profile and user overrides into a recommendation
//! 4. Generate the daily and weekly workout and diet plans
//!
//! Profile values are taken as-is; range checking is left to callers that
//! need it.

use std::sync::Arc;

use fitplan_core::errors::AppResult;
use fitplan_core::models::{Catalog, PlanResponse, UserProfile};
use rand::Rng;

use crate::cluster::ClusterModel;
use crate::metrics::{body_mass_index, daily_calorie_target};
use crate::planner::{
    daily_diet, daily_workout, weekly_diet, weekly_workout, DietPlanParams, WorkoutPlanParams,
};
use crate::recommendation::{resolve, ResolveParams};

/// Shared plan engine owning the catalog and the trained cluster model
#[derive(Debug, Clone)]
pub struct PlanEngine {
    catalog: Arc<Catalog>,
    model: ClusterModel,
}

impl PlanEngine {
    /// Create an engine over a catalog and a trained model
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, model: ClusterModel) -> Self {
        Self { catalog, model }
    }

    /// Catalog backing the planners
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Trained cluster model
    #[must_use]
    pub fn model(&self) -> &ClusterModel {
        &self.model
    }

    /// Build the full plan response for a user profile
    ///
    /// # Errors
    ///
    /// Returns an unknown-cluster error when the model assigns a cluster
    /// with no profile, which cannot happen for a model trained with the
    /// fixed cluster count.
    pub fn build_plan<R>(&self, profile: &UserProfile, rng: &mut R) -> AppResult<PlanResponse>
    where
        R: Rng + ?Sized,
    {
        let bmi = body_mass_index(f64::from(profile.weight_kg), f64::from(profile.height_cm));
        let daily_calories = daily_calorie_target(
            profile.age,
            f64::from(profile.weight_kg),
            f64::from(profile.height_cm),
            profile.sex,
            profile.goal,
        );
        let cluster_id = self.model.predict(
            bmi,
            f64::from(daily_calories),
            f64::from(profile.time_per_day_min),
        );

        let recommendation = resolve(ResolveParams {
            cluster_id,
            daily_calories,
            time_per_day_min: profile.time_per_day_min,
            goal: profile.goal,
            equipment: profile.equipment,
            diet_pref: profile.diet_pref,
        })?;

        let workout_params = WorkoutPlanParams {
            workout_plan: recommendation.workout_plan.clone(),
            time_per_day_min: profile.time_per_day_min,
            equipment: profile.equipment,
        };
        let diet_params = DietPlanParams {
            diet_plan: recommendation.diet_plan.clone(),
            calorie_target: daily_calories,
        };

        let daily_workout = daily_workout(&self.catalog, &workout_params, rng);
        let daily_diet = daily_diet(&self.catalog, &diet_params, rng);
        let weekly_workout = weekly_workout(&self.catalog, &workout_params, rng);
        let weekly_diet = weekly_diet(&self.catalog, &diet_params, rng);

        tracing::debug!(
            cluster_id,
            bmi,
            daily_calories,
            workout_plan = %recommendation.workout_plan,
            diet_plan = %recommendation.diet_plan,
            "built fitness plan"
        );

        Ok(PlanResponse {
            bmi,
            daily_calories,
            recommendation,
            daily_workout,
            daily_diet,
            weekly_workout,
            weekly_diet,
        })
    }
}
