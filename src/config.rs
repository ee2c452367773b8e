// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Covers the HTTP listener, dataset directory, and model seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Environment-backed server configuration.
//!
//! Recognized variables:
//! - `HTTP_PORT`: listener port, defaults to 8080
//! - `HOST`: bind host, defaults to 127.0.0.1
//! - `DATA_DIR`: directory holding the CSV datasets, defaults to ./data
//! - `MODEL_SEED`: seed for the cluster-model fit, defaults to the fixed
//!   training seed

use anyhow::{Context, Result};
use fitplan_engine::cluster::DEFAULT_SEED;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the fitplan server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP listener
    pub http_port: u16,
    /// Bind host for the HTTP listener
    pub host: String,
    /// Directory holding the CSV datasets
    pub data_dir: PathBuf,
    /// Seed for the cluster-model fit
    pub model_seed: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self> {
        let model_seed = match env::var("MODEL_SEED") {
            Ok(value) => value.parse().context("Invalid MODEL_SEED value")?,
            Err(_) => DEFAULT_SEED,
        };

        Ok(Self {
            http_port: env_var_or("HTTP_PORT", "8080")?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", "127.0.0.1")?,
            data_dir: PathBuf::from(env_var_or("DATA_DIR", "./data")?),
            model_seed,
        })
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitplan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Host: {}\n\
             - Data Directory: {}\n\
             - Model Seed: {}",
            self.http_port,
            self.host,
            self.data_dir.display(),
            self.model_seed
        )
    }
}

fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_owned()))
}
