// ABOUTME: Validation errors raised while mapping submitted values to model inputs
// ABOUTME: Distinguishes unknown category values from absent or unparseable fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! # Prediction Error Types
//!
//! - `PredictionError` - why a submission could not be turned into a prediction
//! - Conversion to `AppError` for the JSON API

use super::{AppError, ErrorCode};
use crate::constants::user_messages;
use crate::models::CategoryKind;
use thiserror::Error;

/// Reasons a submission cannot be evaluated.
///
/// Both variants are recovered at the HTTP boundary and rendered as a
/// user-facing message; neither ever reaches the prediction engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// A submitted string does not belong to its category
    #[error("invalid {} value '{value}'", .kind.field_name())]
    InvalidCategory {
        /// Which category was being decoded
        kind: CategoryKind,
        /// The rejected value as submitted
        value: String,
    },
    /// A field is absent or the request body could not be parsed
    #[error("malformed request: {reason}")]
    MalformedRequest {
        /// Missing field, when the failure is attributable to one
        field: Option<&'static str>,
        /// What went wrong
        reason: String,
    },
}

impl PredictionError {
    /// Create an "invalid category" error
    #[must_use]
    pub fn invalid_category(kind: CategoryKind, value: impl Into<String>) -> Self {
        Self::InvalidCategory {
            kind,
            value: value.into(),
        }
    }

    /// Create a "malformed request" error for an absent field
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MalformedRequest {
            field: Some(field),
            reason: format!("missing field '{field}'"),
        }
    }

    /// Create a "malformed request" error for an unparseable body
    #[must_use]
    pub fn unparseable(reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            field: None,
            reason: reason.into(),
        }
    }

    /// Message shown to the person who submitted the form
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCategory { .. } => user_messages::INVALID_CATEGORY,
            Self::MalformedRequest { .. } => user_messages::MALFORMED_REQUEST,
        }
    }

    /// Standard error code for this failure
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidCategory { .. } => ErrorCode::InvalidInput,
            Self::MalformedRequest { field: Some(_), .. } => ErrorCode::MissingRequiredField,
            Self::MalformedRequest { field: None, .. } => ErrorCode::InvalidFormat,
        }
    }
}

impl From<PredictionError> for AppError {
    fn from(error: PredictionError) -> Self {
        let details = match &error {
            PredictionError::InvalidCategory { kind, value } => serde_json::json!({
                "field": kind.field_name(),
                "value": value,
                "allowed": kind.labels(),
            }),
            PredictionError::MalformedRequest { field, reason } => serde_json::json!({
                "field": field,
                "reason": reason,
            }),
        };
        Self::new(error.error_code(), error.user_message())
            .with_details(details)
            .with_source(error)
    }
}
