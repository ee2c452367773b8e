// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Owns the plan engine and the effective configuration behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Shared state for the HTTP layer.

use std::sync::Arc;

use fitplan_engine::PlanEngine;

use crate::config::ServerConfig;

/// Resources shared across all request handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Plan engine over the loaded catalog and trained model
    pub engine: Arc<PlanEngine>,
    /// Effective server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create server resources with proper Arc sharing
    #[must_use]
    pub fn new(engine: PlanEngine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}
