// ABOUTME: Integration tests for cluster model training and prediction
// ABOUTME: Verifies determinism, cluster ranges, and encoder coverage over fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan_core::errors::ErrorCode;
use fitplan_engine::cluster::DEFAULT_SEED;
use fitplan_engine::profiles::CLUSTER_COUNT;
use fitplan_engine::ClusterModel;

#[test]
fn test_training_produces_the_fixed_cluster_count() {
    let model = ClusterModel::train(&common::training_samples(), DEFAULT_SEED).unwrap();

    assert_eq!(model.centroids().len(), CLUSTER_COUNT);
}

#[test]
fn test_predictions_stay_in_cluster_range() {
    let model = ClusterModel::train(&common::training_samples(), DEFAULT_SEED).unwrap();

    for bmi in [15.0, 22.86, 28.0, 36.0] {
        for calories in [1200.0, 1900.0, 2400.0, 3100.0] {
            for minutes in [10.0, 45.0, 90.0] {
                let cluster = model.predict(bmi, calories, minutes);
                assert!(cluster < CLUSTER_COUNT as u32);
            }
        }
    }
}

#[test]
fn test_same_seed_gives_identical_models() {
    let samples = common::training_samples();
    let first = ClusterModel::train(&samples, DEFAULT_SEED).unwrap();
    let second = ClusterModel::train(&samples, DEFAULT_SEED).unwrap();

    assert_eq!(first.centroids(), second.centroids());
    for sample in &samples {
        assert_eq!(
            first.predict(sample.bmi, sample.daily_calories, sample.time_per_day),
            second.predict(sample.bmi, sample.daily_calories, sample.time_per_day)
        );
    }
}

#[test]
fn test_one_sample_per_band_gets_its_own_cluster() {
    // With exactly as many samples as clusters, every sample becomes its
    // own centroid and nearby probes resolve to it.
    let samples: Vec<_> = [
        ("fat_loss", 31.2, 1450.0, 30.0),
        ("general", 23.8, 2050.0, 45.0),
        ("weight_gain", 17.2, 2450.0, 25.0),
        ("muscle_gain", 23.4, 2850.0, 75.0),
    ]
    .into_iter()
    .map(|(goal, bmi, calories, minutes)| {
        let mut sample = common::training_samples().remove(0);
        sample.goal = goal.to_owned();
        sample.bmi = bmi;
        sample.daily_calories = calories;
        sample.time_per_day = minutes;
        sample
    })
    .collect();

    let model = ClusterModel::train(&samples, DEFAULT_SEED).unwrap();

    let mut assigned: Vec<u32> = samples
        .iter()
        .map(|s| model.predict(s.bmi, s.daily_calories, s.time_per_day))
        .collect();
    for (sample, &cluster) in samples.iter().zip(&assigned) {
        let probe = model.predict(sample.bmi, sample.daily_calories + 10.0, sample.time_per_day);
        assert_eq!(probe, cluster);
    }

    assigned.sort_unstable();
    assigned.dedup();
    assert_eq!(assigned.len(), CLUSTER_COUNT);
}

#[test]
fn test_encoders_cover_every_categorical_column() {
    let model = ClusterModel::train(&common::training_samples(), DEFAULT_SEED).unwrap();
    let encoders = model.encoders();

    assert_eq!(encoders.goal.class_count(), 4);
    assert_eq!(encoders.equipment.class_count(), 3);
    assert_eq!(encoders.sex.class_count(), 1);
    assert!(encoders.budget.encode("medium").is_some());
    assert!(encoders.diet_pref.encode("veg").is_some());
}

#[test]
fn test_too_few_samples_is_a_dataset_error() {
    let samples: Vec<_> = common::training_samples().into_iter().take(3).collect();

    let error = ClusterModel::train(&samples, DEFAULT_SEED).unwrap_err();
    assert_eq!(error.code, ErrorCode::DatasetError);
}
