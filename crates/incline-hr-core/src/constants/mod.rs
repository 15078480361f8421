// ABOUTME: Constants for the change-rate model, user-facing messages, and form fields
// ABOUTME: Organized by domain so the engine, handlers, and templates share one source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Fitted coefficients of the log-linear change-rate model
pub mod change_rate_model {
    /// Model intercept on the log scale
    pub const INTERCEPT: f64 = 2.3695;

    /// Coefficient applied to the walk indicator (walk = 1, run = 0)
    pub const BETA_EXERCISE_WALK: f64 = -0.7421;

    /// Coefficient applied to the uphill indicator (up = 1, down = 0)
    pub const BETA_INCLINE_UP: f64 = 0.6865;

    /// Coefficient applied to the walk x uphill interaction term
    pub const BETA_INTERACTION: f64 = 0.4139;

    /// Multiplicative scale applied after exponentiation; enters the sum as `ln(SCALE)`
    pub const SCALE: f64 = 0.281;

    /// Unit label appended to formatted predictions
    pub const UNIT: &str = "BPM";
}

/// Messages shown to end users when a submission cannot be evaluated
pub mod user_messages {
    /// A submitted value did not match its category
    pub const INVALID_CATEGORY: &str = "Invalid input. Please select valid inputs.";

    /// A field was absent or the submission could not be parsed
    pub const MALFORMED_REQUEST: &str = "Please provide valid input values.";
}

/// Names of the submitted form / JSON fields
pub mod form_fields {
    /// Exercise type field (`walk` or `run`)
    pub const EXERCISE_TYPE: &str = "exerciseType";

    /// Incline direction field (`up` or `down`)
    pub const INCLINE_DIRECTION: &str = "inclineDirection";

    /// Legacy name of the exercise field, still accepted on input
    pub const LEGACY_EXERCISE_TYPE: &str = "ExerciseTypewalk";

    /// Legacy name of the incline field, still accepted on input
    pub const LEGACY_INCLINE_DIRECTION: &str = "InclineRateup";
}
