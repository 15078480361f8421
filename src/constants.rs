// ABOUTME: Application constants for service identity, environment defaults, and limits
// ABOUTME: Model coefficients and user messages live in incline-hr-core::constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Constants module

use std::env;

pub use incline_hr_core::constants::{change_rate_model, form_fields, user_messages};

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the server binary / service
    pub const INCLINE_HR_SERVER: &str = "incline-hr-server";
}

/// Default values for environment-driven settings
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 5000;

    /// Default bind address (all interfaces)
    pub const HOST: &str = "0.0.0.0";

    /// Default CORS origin list
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Request handling limits
pub mod limits {
    /// Default per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Default maximum request body size in bytes
    pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;
}

/// HTTP header names
pub mod headers {
    /// Correlation header read from and written to every request
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Environment-based configuration lookups
pub mod env_config {
    use super::{defaults, env};

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_owned())
    }
}
