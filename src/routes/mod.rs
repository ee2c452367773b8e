// ABOUTME: Route module organization for the fitplan HTTP endpoints
// ABOUTME: Provides centralized route definitions and the assembled application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Route module for the fitplan server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the plan engine. [`router`] merges them into
//! the application router with request tracing applied to every endpoint.

/// Health check and system status routes
pub mod health;
/// Plan generation routes
pub mod plan;

pub use health::HealthRoutes;
pub use plan::PlanRoutes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::ServerResources;

/// Assemble the application router over shared server resources
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(PlanRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
