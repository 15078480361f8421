// ABOUTME: Request ID middleware that tags every request and response with a correlation ID
// ABOUTME: Honours an incoming x-request-id header or generates a UUID v4
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

use crate::constants::headers::REQUEST_ID;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::fmt;
use tracing::Span;
use uuid::Uuid;

/// Longest client-supplied request ID we are willing to echo back
const MAX_INCOMING_REQUEST_ID_LEN: usize = 128;

/// Correlation ID attached to the request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Borrow the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reuse a well-formed incoming ID, otherwise mint a new one
fn resolve_request_id(request: &Request) -> String {
    request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_INCOMING_REQUEST_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned)
}

/// Attach a [`RequestId`] to the request and echo it in the response headers
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(&request);

    Span::current().record("request_id", request_id.as_str());
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID, value);
    }

    response
}
