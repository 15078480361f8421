// ABOUTME: Re-exports the unified error types from incline-hr-core
// ABOUTME: Keeps `crate::errors::*` paths stable for route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Error types shared with the core crate. `AppError` implements
//! `IntoResponse` through the core crate's `http-response` feature.

pub use incline_hr_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, PredictionError,
};
