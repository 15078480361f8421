// ABOUTME: Security headers configuration and middleware for every HTTP response
// ABOUTME: Development and production presets chosen from the deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! # Security Headers Middleware
//!
//! Adds browser security headers (CSP, frame options, MIME sniffing
//! protection, referrer policy) to every response, including error pages.

use crate::config::environment::Environment;
use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

const PERMISSIONS_POLICY: &str = "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=(), gyroscope=(), accelerometer=()";

/// Security headers configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    /// Content Security Policy header value
    pub csp: String,
    /// X-Frame-Options header value
    pub frame_options: String,
    /// X-Content-Type-Options header value
    pub content_type_options: String,
    /// Referrer-Policy header value
    pub referrer_policy: String,
    /// Permissions-Policy header value
    pub permissions_policy: String,
    /// Strict-Transport-Security header value (for HTTPS)
    pub hsts: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl SecurityConfig {
    /// Pick the preset for a deployment environment
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Development preset: no HSTS since local servers run over plain HTTP
    #[must_use]
    pub fn development() -> Self {
        Self {
            csp: "default-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; form-action 'self'; frame-ancestors 'none'; object-src 'none'; base-uri 'self';".to_owned(),
            frame_options: "DENY".to_owned(),
            content_type_options: "nosniff".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            permissions_policy: PERMISSIONS_POLICY.to_owned(),
            hsts: None,
        }
    }

    /// Production preset
    #[must_use]
    pub fn production() -> Self {
        Self {
            csp: "default-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; form-action 'self'; frame-ancestors 'none'; object-src 'none'; base-uri 'self'; upgrade-insecure-requests;".to_owned(),
            frame_options: "DENY".to_owned(),
            content_type_options: "nosniff".to_owned(),
            referrer_policy: "strict-origin-when-cross-origin".to_owned(),
            permissions_policy: PERMISSIONS_POLICY.to_owned(),
            hsts: Some("max-age=31536000; includeSubDomains".to_owned()), // 1 year
        }
    }

    /// Header name/value pairs to apply
    #[must_use]
    pub fn to_headers(&self) -> Vec<(&'static str, &str)> {
        let mut headers = vec![
            ("content-security-policy", self.csp.as_str()),
            ("x-frame-options", self.frame_options.as_str()),
            ("x-content-type-options", self.content_type_options.as_str()),
            ("referrer-policy", self.referrer_policy.as_str()),
            ("permissions-policy", self.permissions_policy.as_str()),
        ];

        if let Some(hsts) = &self.hsts {
            headers.push(("strict-transport-security", hsts.as_str()));
        }

        headers
    }
}

/// Apply the configured security headers to the response
pub async fn security_headers_middleware(
    State(config): State<Arc<SecurityConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in config.to_headers() {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(name), value);
            }
            Err(e) => warn!("Skipping invalid {name} header value: {e}"),
        }
    }

    response
}
