// ABOUTME: Core data models for the fitplan recommendation service
// ABOUTME: Re-exports UserProfile, catalog rows, and plan output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Data Models
//!
//! This module contains the core data structures used throughout the fitplan
//! service: the per-request user profile, the immutable reference catalog
//! rows loaded at startup, and the plan structures returned to callers.
//!
//! ## Design Principles
//!
//! - **Serializable**: All models support JSON (API) and CSV (datasets) via serde
//! - **Type Safe**: Closed enums for the categorical profile fields
//! - **Immutable reference data**: Catalog rows are loaded once and never mutated

// Domain modules
mod catalog;
mod plan;
mod profile;

// Re-export all public types for convenience
// Request domain
pub use profile::{Budget, DietPreference, Equipment, Goal, Sex, UserProfile};

// Reference catalog domain
pub use catalog::{Catalog, FitnessSample, FoodRow, WorkoutRow};

// Plan output domain
pub use plan::{DayOfWeek, PlanResponse, Recommendation, WeeklySchedule};
