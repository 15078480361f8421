// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Request handling limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpLimitsConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes
    pub max_request_body_bytes: usize,
}

impl Default for HttpLimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: limits::REQUEST_TIMEOUT_SECS,
            max_request_body_bytes: limits::MAX_REQUEST_BODY_BYTES,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// CORS settings
    pub cors: CorsConfig,
    /// Timeout and body size limits
    pub limits: HttpLimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors: CorsConfig::default(),
            limits: HttpLimitsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the result
    /// fails [`ServerConfig::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_config::host(),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            limits: HttpLimitsConfig {
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &limits::REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
                max_request_body_bytes: env_var_or(
                    "MAX_REQUEST_BODY_BYTES",
                    &limits::MAX_REQUEST_BODY_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_REQUEST_BODY_BYTES value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not an IP address or a limit is zero
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .with_context(|| format!("HOST must be an IP address, got '{}'", self.host))?;

        if self.limits.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }
        if self.limits.max_request_body_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_REQUEST_BODY_BYTES must be greater than zero"
            ));
        }

        if self.environment.is_production() && self.cors.allowed_origins.trim() == "*" {
            warn!("CORS allows any origin in production");
        }

        Ok(())
    }

    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not an IP address
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST value '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.http_port))
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Incline HR Server Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Body Size: {} bytes",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.cors.allowed_origins,
            self.limits.request_timeout_secs,
            self.limits.max_request_body_bytes,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
