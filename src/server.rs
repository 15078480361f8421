// ABOUTME: Router assembly and lifecycle for the prediction HTTP server
// ABOUTME: Merges form, API, and health routes under one middleware stack with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! # Prediction Server
//!
//! Layers, innermost first: timeout (per route group), body limit, CORS,
//! security headers, request ID, then the trace layer that opens the
//! `http_request` span. The body limit is enforced by the extractors so an
//! oversized submission reaches the handlers as a rejection.

use crate::config::environment::ServerConfig;
use crate::errors::AppError;
use crate::middleware::{make_request_span, record_response, request_id_middleware, setup_cors};
use crate::routes::{HealthRoutes, PredictionApiRoutes, PredictionRoutes};
use crate::security::{security_headers_middleware, SecurityConfig};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::Uri, middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// HTTP server for the prediction surfaces
pub struct PredictionServer {
    config: ServerConfig,
}

impl PredictionServer {
    /// Create a server from validated configuration
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the complete router with all middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let security = Arc::new(SecurityConfig::for_environment(self.config.environment));
        let timeout = TimeoutLayer::new(Duration::from_secs(
            self.config.limits.request_timeout_secs,
        ));

        // Timed-out form submissions still get the rendered page
        let form_routes = PredictionRoutes::routes()
            .layer(timeout.clone())
            .layer(middleware::map_response(
                PredictionRoutes::render_interrupted_submission,
            ));
        let api_routes = PredictionApiRoutes::routes().layer(timeout);

        Router::new()
            .merge(form_routes)
            .merge(api_routes)
            .merge(HealthRoutes::routes())
            .fallback(Self::handle_not_found)
            .layer(DefaultBodyLimit::max(
                self.config.limits.max_request_body_bytes,
            ))
            .layer(setup_cors(&self.config))
            .layer(middleware::from_fn_with_state(
                security,
                security_headers_middleware,
            ))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_response(record_response),
            )
    }

    async fn handle_not_found(uri: Uri) -> AppError {
        AppError::not_found(format!("Route {}", uri.path()))
    }

    /// Bind the configured address and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_address()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while accepting connections
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!("HTTP server listening on http://{local_addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
