// ABOUTME: Plan generation route handler turning a user profile into a full plan
// ABOUTME: Maps body rejections to invalid-input errors and samples with a fresh RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Plan generation route.
//!
//! `POST /api/plan` takes a JSON user profile and answers with the computed
//! metrics, the resolved recommendation, and the daily and weekly plans.
//! Each request draws from a freshly seeded RNG, so two identical profiles
//! can receive different samples.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fitplan_core::errors::AppError;
use fitplan_core::models::UserProfile;

use crate::context::ServerResources;

/// Plan generation routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plan", post(Self::handle_generate_plan))
            .with_state(resources)
    }

    /// Handle generating a plan from a user profile
    async fn handle_generate_plan(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<UserProfile>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(profile) =
            payload.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;

        let mut rng = StdRng::from_entropy();
        let plan = resources.engine.build_plan(&profile, &mut rng)?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
