// ABOUTME: Server binary wiring configuration, datasets, and the trained model
// ABOUTME: Serves the plan API over HTTP with graceful shutdown on ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Fitplan Server Binary
//!
//! This binary loads the CSV datasets, trains the cluster model, and starts
//! the HTTP API for plan generation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fitplan::{
    config::ServerConfig, context::ServerResources, datasets::DatasetStore, logging, routes,
};
use fitplan_engine::{ClusterModel, PlanEngine};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitplan-server")]
#[command(about = "Fitplan API - personalized workout and diet plan service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override dataset directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args {
                http_port: None,
                data_dir: None,
            }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply command-line overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Fitplan API");
    info!("{}", config.summary());

    // Load datasets and train the cluster model
    let store = DatasetStore::load(&config.data_dir)?;
    let model = ClusterModel::train(store.samples(), config.model_seed)?;
    info!("Cluster model ready");

    let engine = PlanEngine::new(store.catalog(), model);
    let resources = Arc::new(ServerResources::new(engine, config.clone()));
    let app = routes::router(resources);

    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server listening on {addr}");
    display_available_endpoints(&config);
    info!("Ready to serve fitness plans!");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server shut down cleanly");
    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);

    info!("=== Available API Endpoints ===");
    info!("  POST {base}/api/plan - Generate a personalized fitness plan");
    info!("  GET  {base}/api/health - Service health");
    info!("  GET  {base}/api/ready - Readiness with dataset counts");
    info!("=== End of Endpoint List ===");
}

/// Resolve once a shutdown signal arrives
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
