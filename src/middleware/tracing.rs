// ABOUTME: Request tracing hooks for the tower-http TraceLayer
// ABOUTME: Creates one http_request span per request and logs its outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

use crate::logging::AppLogger;
use axum::{body::Body, http::Request, response::Response};
use std::time::Duration;
use tracing::Span;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// `make_span_with` hook; the request ID is recorded later by the request ID middleware
pub fn make_request_span(request: &Request<Body>) -> Span {
    create_request_span(request.method().as_str(), request.uri().path())
}

/// `on_response` hook: record status and latency on the request span
pub fn record_response(response: &Response, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);

    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    AppLogger::log_http_response(status, duration_ms);
}
