// ABOUTME: Recommendation engine for fitplan: metrics, clustering, and plan sampling
// ABOUTME: Pure computation crate kept free of HTTP and I/O concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Engine
//!
//! The computation core of the fitplan service. Everything here is a bounded
//! in-memory evaluation over the immutable reference catalog: no I/O, no HTTP,
//! no shared mutable state. The only nondeterminism is the caller-supplied
//! random source used for row sampling.
//!
//! ## Modules
//!
//! - **metrics**: BMI and daily calorie target formulas
//! - **encoding**: label encoding for categorical training columns
//! - **kmeans**: seeded k-means clustering
//! - **cluster**: the trained cluster model over fitness samples
//! - **profiles**: the static cluster-to-strategy profile table
//! - **recommendation**: cluster profile + preference overrides -> recommendation
//! - **planner**: filtered random sampling of daily and weekly plan rows
//! - **engine**: the per-request entry point composing all of the above

/// BMI and daily calorie target formulas
pub mod metrics;

/// Label encoding for categorical training columns
pub mod encoding;

/// Seeded k-means clustering
pub mod kmeans;

/// Trained cluster model mapping metric triples to cluster labels
pub mod cluster;

/// Static cluster-to-strategy profile table
pub mod profiles;

/// Recommendation resolution from cluster profile and preferences
pub mod recommendation;

/// Daily and weekly plan generation by filtered random sampling
pub mod planner;

/// Per-request plan assembly
pub mod engine;

pub use cluster::ClusterModel;
pub use engine::PlanEngine;
