// ABOUTME: Stateless request handler turning submitted strings into a prediction
// ABOUTME: Validates presence first, then category membership, then runs the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

use super::{ChangeRateModel, PredictionResult};
use crate::constants::form_fields;
use crate::errors::PredictionError;
use crate::models::{BinaryCategory, ExerciseType, InclineDirection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw prediction input as submitted by a form or JSON client.
///
/// Fields stay optional so that an absent field is reported as a malformed
/// request rather than rejected by the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// `walk` or `run`
    #[serde(
        rename = "exerciseType",
        alias = "ExerciseTypewalk",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exercise_type: Option<String>,
    /// `up` or `down`
    #[serde(
        rename = "inclineDirection",
        alias = "InclineRateup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub incline_direction: Option<String>,
}

impl PredictionRequest {
    /// Build a request from submitted values
    #[must_use]
    pub fn new(exercise_type: impl Into<String>, incline_direction: impl Into<String>) -> Self {
        Self {
            exercise_type: Some(exercise_type.into()),
            incline_direction: Some(incline_direction.into()),
        }
    }

    /// Decode both fields.
    ///
    /// # Errors
    ///
    /// - `MalformedRequest` naming the first absent field
    /// - `InvalidCategory` for the first value outside its category
    pub fn decode(&self) -> Result<(ExerciseType, InclineDirection), PredictionError> {
        let exercise = self
            .exercise_type
            .as_deref()
            .ok_or_else(|| PredictionError::missing_field(form_fields::EXERCISE_TYPE))?;
        let incline = self
            .incline_direction
            .as_deref()
            .ok_or_else(|| PredictionError::missing_field(form_fields::INCLINE_DIRECTION))?;

        Ok((
            ExerciseType::from_label(exercise)?,
            InclineDirection::from_label(incline)?,
        ))
    }
}

/// Evaluate a submission against the standard model.
///
/// Invalid input short-circuits: the model is only evaluated once both fields
/// have been decoded.
///
/// # Errors
///
/// Returns the `PredictionError` produced by [`PredictionRequest::decode`].
pub fn evaluate(request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
    let (exercise, incline) = request.decode()?;
    let result = ChangeRateModel::standard().predict(exercise, incline);
    debug!(
        exercise_type = %exercise,
        incline_direction = %incline,
        change_rate_bpm = result.change_rate_bpm,
        "Evaluated change-rate prediction"
    );
    Ok(result)
}
