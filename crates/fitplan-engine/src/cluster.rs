// ABOUTME: Training and prediction for the fitness-profile cluster model
// ABOUTME: Pairs a seeded k-means fit with label encoders for categorical columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Cluster model over the fitness-profile table.
//!
//! Training label-encodes the categorical columns and fits a seeded k-means
//! over the numeric features `[bmi, daily_calories, time_per_day]`. The
//! feature matrix uses the raw numeric values without scaling, so the fit is
//! dominated by the calorie axis by construction.

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::FitnessSample;

use crate::encoding::LabelEncoder;
use crate::kmeans::KMeans;
use crate::profiles::CLUSTER_COUNT;

/// Seed used when no override is configured
pub const DEFAULT_SEED: u64 = 42;

/// Fitted encoders for the categorical profile columns
#[derive(Debug, Clone)]
pub struct CategoricalEncoders {
    /// Encoder for the `sex` column
    pub sex: LabelEncoder,
    /// Encoder for the `goal` column
    pub goal: LabelEncoder,
    /// Encoder for the `diet_pref` column
    pub diet_pref: LabelEncoder,
    /// Encoder for the `budget` column
    pub budget: LabelEncoder,
    /// Encoder for the `equipment` column
    pub equipment: LabelEncoder,
}

impl CategoricalEncoders {
    /// Fit one encoder per categorical column of the profile table
    #[must_use]
    pub fn fit(samples: &[FitnessSample]) -> Self {
        Self {
            sex: LabelEncoder::fit(samples.iter().map(|s| s.sex.as_str())),
            goal: LabelEncoder::fit(samples.iter().map(|s| s.goal.as_str())),
            diet_pref: LabelEncoder::fit(samples.iter().map(|s| s.diet_pref.as_str())),
            budget: LabelEncoder::fit(samples.iter().map(|s| s.budget.as_str())),
            equipment: LabelEncoder::fit(samples.iter().map(|s| s.equipment.as_str())),
        }
    }
}

/// Trained cluster model assigning users to one of the fixed profiles
#[derive(Debug, Clone)]
pub struct ClusterModel {
    kmeans: KMeans,
    encoders: CategoricalEncoders,
}

impl ClusterModel {
    /// Train the model over the fitness-profile samples with a fixed seed
    ///
    /// # Errors
    ///
    /// Returns a dataset error when there are fewer samples than clusters.
    pub fn train(samples: &[FitnessSample], seed: u64) -> AppResult<Self> {
        if samples.len() < CLUSTER_COUNT {
            return Err(AppError::dataset(format!(
                "fitness-profile table needs at least {CLUSTER_COUNT} rows, got {}",
                samples.len()
            )));
        }

        let encoders = CategoricalEncoders::fit(samples);
        let matrix: Vec<Vec<f64>> = samples
            .iter()
            .map(|s| vec![s.bmi, s.daily_calories, s.time_per_day])
            .collect();
        let kmeans = KMeans::fit(&matrix, CLUSTER_COUNT, seed)?;

        tracing::info!(
            clusters = CLUSTER_COUNT,
            samples = samples.len(),
            seed,
            "trained fitness cluster model"
        );
        Ok(Self { kmeans, encoders })
    }

    /// Cluster id for a user's numeric features
    #[must_use]
    pub fn predict(&self, bmi: f64, daily_calories: f64, time_per_day: f64) -> u32 {
        self.kmeans.predict(&[bmi, daily_calories, time_per_day]) as u32
    }

    /// Encoders fitted over the categorical profile columns
    #[must_use]
    pub fn encoders(&self) -> &CategoricalEncoders {
        &self.encoders
    }

    /// Fitted cluster centroids
    #[must_use]
    pub fn centroids(&self) -> &[Vec<f64>] {
        self.kmeans.centroids()
    }
}
