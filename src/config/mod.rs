// ABOUTME: Configuration management module for server settings loaded from the environment
// ABOUTME: Re-exports the environment-driven ServerConfig and its component types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Configuration module
//!
//! All configuration comes from environment variables; there are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpLimitsConfig, LogLevel, ServerConfig};
