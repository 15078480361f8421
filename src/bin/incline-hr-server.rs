// ABOUTME: Server binary for the heart-rate change prediction service
// ABOUTME: Loads environment configuration, initializes logging, and serves the HTML form and JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! # Incline HR Server Binary
//!
//! Starts the HTTP server on `HOST:HTTP_PORT` (default `0.0.0.0:5000`).

use anyhow::Result;
use clap::Parser;
use incline_hr_server::{config::environment::ServerConfig, logging, server::PredictionServer};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "incline-hr-server")]
#[command(about = "Incline HR - predicts heart-rate change rate for walking or running on an incline")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Before loading config so its validation warnings are recorded
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
        config.validate()?;
    }

    info!("Starting Incline HR server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = PredictionServer::new(config).run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available Endpoints ===");
    info!("   Prediction Form:   GET  http://{host}:{port}/");
    info!("   Form Submission:   POST http://{host}:{port}/predict");
    info!("   JSON Prediction:   POST http://{host}:{port}/api/predict");
    info!("   Model Details:     GET  http://{host}:{port}/api/model");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness Check:   GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
