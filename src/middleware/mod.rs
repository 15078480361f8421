// ABOUTME: HTTP middleware for request correlation, tracing spans, and CORS
// ABOUTME: Security headers live in crate::security
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

/// CORS configuration
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;
/// Request spans for the tower-http trace layer
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
pub use self::tracing::{create_request_span, make_request_span, record_response};
