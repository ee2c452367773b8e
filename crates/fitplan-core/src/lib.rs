// ABOUTME: Core domain types for the fitplan recommendation service
// ABOUTME: Foundation crate with the error model, user profile, catalog rows, and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types for the fitplan recommendation
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **models**: Domain data models (`UserProfile`, catalog rows, plan outputs)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (`UserProfile`, `WorkoutRow`, `FoodRow`, plan outputs)
pub mod models;
