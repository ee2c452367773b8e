// ABOUTME: Immutable reference catalog rows loaded from the bundled datasets
// ABOUTME: Defines WorkoutRow, FoodRow, the training FitnessSample, and the Catalog handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

/// One exercise from the workout reference table
///
/// The `muscle` and `equipment` columns are free text carried over from the
/// source datasets; plan filtering matches substrings against them rather
/// than parsing them into a taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRow {
    /// Exercise name
    pub exercise: String,
    /// Target muscle group, absent for cardio-style rows
    pub muscle: Option<String>,
    /// Required equipment description (e.g. "Bodyweight", "Dumbbell", "Barbell")
    pub equipment: String,
}

impl WorkoutRow {
    /// The synthetic rest-day entry used by the weekly schedule
    #[must_use]
    pub fn rest() -> Self {
        Self {
            exercise: "Rest / Light Walking / Stretching".to_owned(),
            muscle: Some("-".to_owned()),
            equipment: "-".to_owned(),
        }
    }
}

/// One dish from the food reference table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRow {
    /// Dish name
    pub dish: String,
    /// Calories per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein: f64,
    /// Carbohydrates per serving (g)
    pub carbs: f64,
    /// Fats per serving (g)
    pub fats: f64,
}

/// One row of the fitness-profile training table
///
/// Categorical columns stay raw strings here; the cluster model label-encodes
/// them at training time. Only the three numeric columns end up in the
/// training matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessSample {
    /// Age in years
    pub age: u32,
    /// Sex category
    pub sex: String,
    /// Goal category
    pub goal: String,
    /// Dietary preference category
    pub diet_pref: String,
    /// Budget category
    pub budget: String,
    /// Equipment category
    pub equipment: String,
    /// Body-mass index
    pub bmi: f64,
    /// Estimated daily calories
    pub daily_calories: f64,
    /// Minutes available per day
    pub time_per_day: f64,
}

/// The immutable reference catalog shared by all requests
///
/// Built once at startup from the loaded datasets; read-only thereafter, so
/// it can be shared across request tasks without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    workouts: Vec<WorkoutRow>,
    foods: Vec<FoodRow>,
}

impl Catalog {
    /// Assemble a catalog from loaded tables
    #[must_use]
    pub fn new(workouts: Vec<WorkoutRow>, foods: Vec<FoodRow>) -> Self {
        Self { workouts, foods }
    }

    /// The full workout reference table
    #[must_use]
    pub fn workouts(&self) -> &[WorkoutRow] {
        &self.workouts
    }

    /// The full food reference table
    #[must_use]
    pub fn foods(&self) -> &[FoodRow] {
        &self.foods
    }
}
