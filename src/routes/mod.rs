// ABOUTME: Route module organization for the prediction server HTTP endpoints
// ABOUTME: HTML form, JSON API, and health routes, each exposing a routes() constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Route handlers
//!
//! Every route group is stateless; [`crate::server::PredictionServer`]
//! merges them and applies the middleware stack.

/// JSON prediction API
pub mod api;
/// Health check routes
pub mod health;
/// HTML form routes
pub mod prediction;

pub use api::{ModelResponse, PredictionApiRoutes, PredictionResponse};
pub use health::HealthRoutes;
pub use prediction::PredictionRoutes;
