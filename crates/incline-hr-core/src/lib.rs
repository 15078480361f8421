// ABOUTME: Core types and prediction engine for the Incline HR change-rate service
// ABOUTME: Foundation crate with error handling, categorical encoding, and model constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

#![deny(unsafe_code)]

//! # Incline HR Core
//!
//! Foundation crate for the Incline HR service. It owns everything that does
//! not depend on the HTTP shell, so the server crate, tests, and benches can
//! all evaluate predictions through the same code path.
//!
//! ## Modules
//!
//! - **errors**: `PredictionError` for input validation and the application-wide `AppError`
//! - **constants**: Model coefficients, user-facing messages, and form field names
//! - **models**: `ExerciseType`, `InclineDirection`, and the `encode` mapping
//! - **prediction**: The log-linear `ChangeRateModel` and the stateless request handler
//!
//! ## Example
//!
//! ```rust
//! use incline_hr_core::models::{ExerciseType, InclineDirection};
//! use incline_hr_core::prediction::ChangeRateModel;
//!
//! let result = ChangeRateModel::standard().predict(ExerciseType::Run, InclineDirection::Down);
//! assert_eq!(result.formatted(), "3.00 BPM");
//! ```

/// Unified error handling with `AppError`, `ErrorCode`, and `PredictionError`
pub mod errors;

/// Model coefficients, user messages, and form field names
pub mod constants;

/// Categorical input types and their binary encodings
pub mod models;

/// Change-rate prediction engine and request evaluation
pub mod prediction;

pub use errors::{AppError, AppResult, ErrorCode, PredictionError};
pub use models::{encode, BinaryCategory, CategoryKind, ExerciseType, InclineDirection};
pub use prediction::{evaluate, predict, ChangeRateModel, PredictionRequest, PredictionResult};
