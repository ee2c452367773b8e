// ABOUTME: Main library entry point for the fitplan recommendation service
// ABOUTME: Wires configuration, datasets, and the HTTP routes around the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Server
//!
//! An HTTP service that turns a user's fitness profile into a personalized
//! workout and diet plan. The server loads reference catalogs from CSV at
//! startup, trains a small cluster model over historical fitness profiles,
//! and answers plan requests from memory.
//!
//! ## Architecture
//!
//! - **config**: environment-backed server configuration
//! - **logging**: structured logging setup
//! - **datasets**: CSV loading for the workout, food, and profile tables
//! - **context**: shared resources handed to route handlers
//! - **routes**: the HTTP surface (`/api/plan`, `/api/health`, `/api/ready`)
//!
//! The computation itself lives in the `fitplan-engine` crate; shared types
//! and errors live in `fitplan-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Fitplan server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-backed server configuration
pub mod config;

/// Shared resources handed to route handlers
pub mod context;

/// CSV dataset loading
pub mod datasets;

/// Structured logging setup
pub mod logging;

/// HTTP route definitions and the application router
pub mod routes;
