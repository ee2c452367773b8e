// ABOUTME: Seeded k-means clustering over numeric feature rows
// ABOUTME: Uses k-means++ initialization and Lloyd iterations with a fixed cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Minimal k-means implementation for the fitness-profile model.
//!
//! Characteristics:
//! - Deterministic for a fixed seed (`StdRng` seeded from the caller)
//! - k-means++ initialization, falling back to a uniform draw when every
//!   candidate weight is zero (duplicate points)
//! - Lloyd iterations until assignments stabilize or `MAX_ITERATIONS`
//! - Ties in centroid distance resolve to the lowest centroid index
//! - Empty clusters are reseeded to the point farthest from its centroid

use fitplan_core::errors::{AppError, AppResult};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Iteration cap for the Lloyd loop
const MAX_ITERATIONS: usize = 100;

/// Trained k-means model holding one centroid per cluster
#[derive(Debug, Clone)]
pub struct KMeans {
    centroids: Vec<Vec<f64>>,
}

impl KMeans {
    /// Fit `k` clusters over the given feature rows using a seeded RNG
    ///
    /// # Errors
    ///
    /// Returns an error when `k` is zero, when there are fewer rows than
    /// clusters, or when rows disagree on dimension.
    pub fn fit(points: &[Vec<f64>], k: usize, seed: u64) -> AppResult<Self> {
        if k == 0 {
            return Err(AppError::internal("cluster count must be at least 1"));
        }
        if points.len() < k {
            return Err(AppError::dataset(format!(
                "need at least {k} rows to fit {k} clusters, got {}",
                points.len()
            )));
        }
        let dimension = points[0].len();
        if dimension == 0 {
            return Err(AppError::dataset("feature rows must not be empty"));
        }
        if let Some(row) = points.iter().find(|row| row.len() != dimension) {
            return Err(AppError::dataset(format!(
                "inconsistent feature dimensions: expected {dimension}, got {}",
                row.len()
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut centroids = plus_plus_init(points, k, &mut rng);
        let mut assignments = vec![0_usize; points.len()];

        for iteration in 0..MAX_ITERATIONS {
            let next: Vec<usize> = points
                .iter()
                .map(|point| nearest_centroid(&centroids, point))
                .collect();
            if iteration > 0 && next == assignments {
                tracing::debug!(iterations = iteration, "k-means converged");
                break;
            }
            assignments = next;

            let mut sums = vec![vec![0.0; dimension]; k];
            let mut counts = vec![0_usize; k];
            for (point, &cluster) in points.iter().zip(&assignments) {
                counts[cluster] += 1;
                for (sum, value) in sums[cluster].iter_mut().zip(point) {
                    *sum += value;
                }
            }
            for cluster in 0..k {
                if counts[cluster] > 0 {
                    centroids[cluster] = sums[cluster]
                        .iter()
                        .map(|sum| sum / counts[cluster] as f64)
                        .collect();
                }
            }
            reseed_empty_clusters(points, &mut centroids, &mut assignments, &counts);
        }

        Ok(Self { centroids })
    }

    /// Index of the nearest centroid for a feature row
    #[must_use]
    pub fn predict(&self, point: &[f64]) -> usize {
        nearest_centroid(&self.centroids, point)
    }

    /// Fitted centroids, one per cluster
    #[must_use]
    pub fn centroids(&self) -> &[Vec<f64>] {
        &self.centroids
    }

    /// Number of clusters
    #[must_use]
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}

/// k-means++ seeding: later centroids are drawn proportional to squared
/// distance from the nearest already-chosen centroid
fn plus_plus_init(points: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())].clone());

    while centroids.len() < k {
        let weights: Vec<f64> = points
            .iter()
            .map(|point| {
                centroids
                    .iter()
                    .map(|centroid| squared_distance(centroid, point))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let index = match WeightedIndex::new(&weights) {
            Ok(distribution) => distribution.sample(rng),
            // All weights zero: every point already coincides with a centroid
            Err(_) => rng.gen_range(0..points.len()),
        };
        centroids.push(points[index].clone());
    }
    centroids
}

/// Move each empty cluster onto the point farthest from its assigned centroid
fn reseed_empty_clusters(
    points: &[Vec<f64>],
    centroids: &mut [Vec<f64>],
    assignments: &mut [usize],
    counts: &[usize],
) {
    for cluster in 0..centroids.len() {
        if counts[cluster] > 0 {
            continue;
        }
        let farthest = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                (
                    index,
                    squared_distance(&centroids[assignments[index]], point),
                )
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index);
        if let Some(index) = farthest {
            centroids[cluster] = points[index].clone();
            assignments[index] = cluster;
        }
    }
}

fn nearest_centroid(centroids: &[Vec<f64>], point: &[f64]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(centroid, point);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 1.0],
            vec![1.2, 0.8],
            vec![0.9, 1.1],
            vec![10.0, 10.0],
            vec![10.3, 9.7],
            vec![9.8, 10.2],
        ]
    }

    #[test]
    fn test_separated_blobs_land_in_distinct_clusters() {
        let points = two_blobs();
        let model = KMeans::fit(&points, 2, 42).unwrap();

        let low = model.predict(&[1.0, 1.0]);
        let high = model.predict(&[10.0, 10.0]);
        assert_ne!(low, high);
        assert_eq!(model.predict(&[1.1, 0.9]), low);
        assert_eq!(model.predict(&[9.9, 10.1]), high);
    }

    #[test]
    fn test_same_seed_reproduces_centroids() {
        let points = two_blobs();
        let first = KMeans::fit(&points, 2, 7).unwrap();
        let second = KMeans::fit(&points, 2, 7).unwrap();

        assert_eq!(first.centroids(), second.centroids());
    }

    #[test]
    fn test_fewer_rows_than_clusters_is_an_error() {
        let points = vec![vec![1.0], vec![2.0]];
        let result = KMeans::fit(&points, 3, 42);

        assert!(result.is_err());
    }

    #[test]
    fn test_inconsistent_dimensions_is_an_error() {
        let points = vec![vec![1.0, 2.0], vec![3.0]];
        let result = KMeans::fit(&points, 1, 42);

        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_points_still_fit() {
        let points = vec![vec![5.0, 5.0]; 4];
        let model = KMeans::fit(&points, 2, 42).unwrap();

        assert_eq!(model.k(), 2);
        assert!(model.predict(&[5.0, 5.0]) < 2);
    }

    #[test]
    fn test_distance_tie_prefers_lowest_index() {
        let centroids = vec![vec![1.0], vec![-1.0]];

        assert_eq!(nearest_centroid(&centroids, &[0.0]), 0);
    }

    #[test]
    fn test_predict_is_in_range() {
        let points = two_blobs();
        let model = KMeans::fit(&points, 4, 42).unwrap();

        for point in &points {
            assert!(model.predict(point) < 4);
        }
    }
}
