// ABOUTME: Fixed strategy profiles attached to each cluster id
// ABOUTME: Maps a cluster to its goal label, workout type, and diet type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! High-level strategy profiles for the four fitness clusters.

use fitplan_core::errors::{AppError, AppResult};

/// Workout strategy used by the bodyweight override and cluster 0
pub const BODYWEIGHT_CARDIO: &str = "Bodyweight + Cardio";

/// Workout strategy used by the gym override and cluster 1
pub const STRENGTH_TRAINING: &str = "Strength Training";

/// Strategy profile attached to one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterProfile {
    /// Human-readable goal label
    pub goal_label: &'static str,
    /// Baseline workout strategy before per-user overrides
    pub workout_type: &'static str,
    /// Diet family before the dietary-preference suffix
    pub diet_type: &'static str,
}

/// Profiles indexed by cluster id
pub const CLUSTER_PROFILES: [ClusterProfile; 4] = [
    ClusterProfile {
        goal_label: "Fat Loss",
        workout_type: BODYWEIGHT_CARDIO,
        diet_type: "Low-calorie Indian diet",
    },
    ClusterProfile {
        goal_label: "Muscle Gain",
        workout_type: STRENGTH_TRAINING,
        diet_type: "High-protein Indian diet",
    },
    ClusterProfile {
        goal_label: "General Fitness",
        workout_type: "Mixed Training",
        diet_type: "Balanced Indian diet",
    },
    ClusterProfile {
        goal_label: "Healthy Weight Gain",
        workout_type: "Light Strength",
        diet_type: "Calorie-dense Indian diet",
    },
];

/// Number of clusters the model is trained with
pub const CLUSTER_COUNT: usize = CLUSTER_PROFILES.len();

/// Profile for a cluster id
///
/// # Errors
///
/// Returns an unknown-cluster error when the id is out of range.
pub fn profile_for(cluster_id: u32) -> AppResult<&'static ClusterProfile> {
    CLUSTER_PROFILES
        .get(cluster_id as usize)
        .ok_or_else(|| AppError::unknown_cluster(cluster_id))
}
