// ABOUTME: Log-linear heart-rate change-rate model for walking/running on inclines
// ABOUTME: Evaluates the fixed four-coefficient formula and formats the BPM result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! # Change-Rate Prediction
//!
//! Formula:
//!
//! ```text
//! ln(rate) = intercept
//!          + beta_exercise    * walk
//!          + beta_incline     * up
//!          + beta_interaction * walk * up
//!          + ln(scale)
//! rate     = exp(ln(rate))
//! ```
//!
//! where `walk` and `up` are the 0/1 indicators of the two categorical inputs.
//! The model holds no mutable state and is safe to evaluate from any number of
//! tasks at once.

/// Stateless evaluation of submitted form/JSON values
pub mod request;

pub use request::{evaluate, PredictionRequest};

use crate::constants::change_rate_model;
use crate::models::{BinaryCategory, ExerciseType, InclineDirection};
use serde::{Deserialize, Serialize};

/// Coefficients of the log-linear change-rate model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeRateModel {
    /// Intercept on the log scale
    pub intercept: f64,
    /// Coefficient of the walk indicator
    pub beta_exercise: f64,
    /// Coefficient of the uphill indicator
    pub beta_incline: f64,
    /// Coefficient of the walk x uphill interaction
    pub beta_interaction: f64,
    /// Multiplicative output scale (enters the sum as `ln(scale)`)
    pub scale: f64,
}

impl Default for ChangeRateModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl ChangeRateModel {
    /// The fitted model
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            intercept: change_rate_model::INTERCEPT,
            beta_exercise: change_rate_model::BETA_EXERCISE_WALK,
            beta_incline: change_rate_model::BETA_INCLINE_UP,
            beta_interaction: change_rate_model::BETA_INTERACTION,
            scale: change_rate_model::SCALE,
        }
    }

    /// `ln(scale)`
    #[must_use]
    pub fn ln_scale(&self) -> f64 {
        self.scale.ln()
    }

    /// Predicted change rate on the log scale.
    ///
    /// `exercise` and `incline` must be 0 or 1. Terms are summed left to right.
    #[must_use]
    pub fn log_rate(&self, exercise: u8, incline: u8) -> f64 {
        debug_assert!(exercise <= 1 && incline <= 1, "indicators must be 0 or 1");
        let exercise = f64::from(exercise);
        let incline = f64::from(incline);

        self.intercept
            + self.beta_exercise * exercise
            + self.beta_incline * incline
            + self.beta_interaction * exercise * incline
            + self.ln_scale()
    }

    /// Predicted change rate in BPM from raw indicators
    #[must_use]
    pub fn predict_indicators(&self, exercise: u8, incline: u8) -> f64 {
        self.log_rate(exercise, incline).exp()
    }

    /// Predicted change rate for a pair of decoded categories
    #[must_use]
    pub fn predict(&self, exercise: ExerciseType, incline: InclineDirection) -> PredictionResult {
        PredictionResult {
            exercise_type: exercise,
            incline_direction: incline,
            change_rate_bpm: self.predict_indicators(exercise.indicator(), incline.indicator()),
        }
    }

    /// Predictions for all four input combinations, walk/up first
    #[must_use]
    pub fn prediction_table(&self) -> Vec<PredictionResult> {
        ExerciseType::TABLE
            .iter()
            .flat_map(|&(_, exercise)| {
                InclineDirection::TABLE
                    .iter()
                    .map(move |&(_, incline)| self.predict(exercise, incline))
            })
            .collect()
    }
}

/// Evaluate the standard model on raw 0/1 indicators.
///
/// `exercise` is 1 for walk and 0 for run; `incline` is 1 for up and 0 for down.
#[must_use]
pub fn predict(exercise: u8, incline: u8) -> f64 {
    ChangeRateModel::standard().predict_indicators(exercise, incline)
}

/// Outcome of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Exercise type the prediction was made for
    pub exercise_type: ExerciseType,
    /// Incline direction the prediction was made for
    pub incline_direction: InclineDirection,
    /// Predicted change rate, always strictly positive
    pub change_rate_bpm: f64,
}

impl PredictionResult {
    /// Change rate rounded to two decimals followed by the unit, e.g. `"3.00 BPM"`
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.2} {}", self.change_rate_bpm, change_rate_model::UNIT)
    }

    /// Indicator of the exercise input
    #[must_use]
    pub fn exercise_indicator(&self) -> u8 {
        self.exercise_type.indicator()
    }

    /// Indicator of the incline input
    #[must_use]
    pub fn incline_indicator(&self) -> u8 {
        self.incline_direction.indicator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_reference_level_is_intercept_times_scale() {
        let expected = change_rate_model::INTERCEPT.exp() * change_rate_model::SCALE;
        assert!((predict(0, 0) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_log_rate_sums_active_terms() {
        let model = ChangeRateModel::standard();
        let ln_scale = 0.281_f64.ln();

        assert!((model.log_rate(0, 0) - (2.3695 + ln_scale)).abs() < TOLERANCE);
        assert!((model.log_rate(1, 0) - (2.3695 - 0.7421 + ln_scale)).abs() < TOLERANCE);
        assert!((model.log_rate(0, 1) - (2.3695 + 0.6865 + ln_scale)).abs() < TOLERANCE);
        assert!(
            (model.log_rate(1, 1) - (2.3695 - 0.7421 + 0.6865 + 0.4139 + ln_scale)).abs()
                < TOLERANCE
        );
    }

    #[test]
    fn test_formatted_values() {
        let model = ChangeRateModel::standard();
        let cases = [
            (ExerciseType::Walk, InclineDirection::Up, "4.30 BPM"),
            (ExerciseType::Walk, InclineDirection::Down, "1.43 BPM"),
            (ExerciseType::Run, InclineDirection::Up, "5.97 BPM"),
            (ExerciseType::Run, InclineDirection::Down, "3.00 BPM"),
        ];
        for (exercise, incline, expected) in cases {
            assert_eq!(model.predict(exercise, incline).formatted(), expected);
        }
    }

    #[test]
    fn test_typed_and_raw_paths_agree_exactly() {
        let model = ChangeRateModel::standard();
        for result in model.prediction_table() {
            let raw = predict(result.exercise_indicator(), result.incline_indicator());
            assert_eq!(result.change_rate_bpm.to_bits(), raw.to_bits());
        }
    }

    #[test]
    fn test_prediction_table_order() {
        let table = ChangeRateModel::standard().prediction_table();
        let pairs: Vec<_> = table
            .iter()
            .map(|r| (r.exercise_type, r.incline_direction))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (ExerciseType::Walk, InclineDirection::Up),
                (ExerciseType::Walk, InclineDirection::Down),
                (ExerciseType::Run, InclineDirection::Up),
                (ExerciseType::Run, InclineDirection::Down),
            ]
        );
    }
}
