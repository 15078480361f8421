// ABOUTME: Main library entry point for the Incline HR prediction server
// ABOUTME: Provides the HTML form, JSON API, and health routes around the core model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

#![deny(unsafe_code)]

//! # Incline HR Server
//!
//! Serves predictions of heart-rate change rate (BPM) for walking or running
//! up or down an incline. The model lives in `incline-hr-core`; this crate is
//! the HTTP shell around it.
//!
//! ## Endpoints
//!
//! - `GET /` and `POST /predict`: server-rendered HTML form
//! - `POST /api/predict` and `GET /api/model`: JSON API
//! - `GET /health` and `GET /ready`: health checks
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use incline_hr_server::config::environment::ServerConfig;
//! use incline_hr_server::server::PredictionServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     PredictionServer::new(config).run().await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants and environment defaults
pub mod constants;

/// Unified error handling (re-exported from `incline-hr-core`)
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request IDs and request spans
pub mod middleware;

/// Server-rendered HTML pages
pub mod pages;

/// HTTP route handlers
pub mod routes;

/// Security headers configuration and middleware
pub mod security;

/// Router assembly and server lifecycle
pub mod server;

/// Utility functions and helpers
pub mod utils;
