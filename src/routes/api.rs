// ABOUTME: JSON API route handlers for predictions and model introspection
// ABOUTME: POST /api/predict evaluates one request, GET /api/model exposes coefficients and the full table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! JSON prediction API
//!
//! Errors use the shared `ErrorResponse` body produced by `AppError`.

use crate::constants::change_rate_model;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::middleware::RequestId;
use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Extension, Json, Router,
};
use incline_hr_core::{
    evaluate, ChangeRateModel, ExerciseType, InclineDirection, PredictionError,
    PredictionRequest, PredictionResult,
};
use serde::{Deserialize, Serialize};

const SURFACE: &str = "api";

/// Body returned by `POST /api/predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Predicted rate of heart-rate change
    pub change_rate_bpm: f64,
    /// Two-decimal display string, e.g. `"4.30 BPM"`
    pub formatted: String,
    /// Decoded exercise type
    pub exercise_type: ExerciseType,
    /// Binary indicator for the exercise type (walk = 1)
    pub exercise_indicator: u8,
    /// Decoded incline direction
    pub incline_direction: InclineDirection,
    /// Binary indicator for the incline direction (up = 1)
    pub incline_indicator: u8,
}

impl From<&PredictionResult> for PredictionResponse {
    fn from(result: &PredictionResult) -> Self {
        Self {
            change_rate_bpm: result.change_rate_bpm,
            formatted: result.formatted(),
            exercise_type: result.exercise_type,
            exercise_indicator: result.exercise_indicator(),
            incline_direction: result.incline_direction,
            incline_indicator: result.incline_indicator(),
        }
    }
}

/// Body returned by `GET /api/model`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Regression coefficients on the log scale
    pub coefficients: ChangeRateModel,
    /// Unit of every prediction
    pub unit: String,
    /// Predictions for all four input combinations
    pub predictions: Vec<PredictionResponse>,
}

/// JSON API routes
pub struct PredictionApiRoutes;

impl PredictionApiRoutes {
    /// Create the JSON API routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/predict", post(Self::handle_predict))
            .route("/api/model", get(Self::handle_model))
    }

    async fn handle_predict(
        request_id: Option<Extension<RequestId>>,
        body: Result<Json<PredictionRequest>, JsonRejection>,
    ) -> Result<Json<PredictionResponse>, AppError> {
        let result = body
            .map_err(|rejection| PredictionError::unparseable(rejection.body_text()))
            .and_then(|Json(request)| evaluate(&request));

        match result {
            Ok(result) => {
                AppLogger::log_prediction(SURFACE, &result);
                Ok(Json(PredictionResponse::from(&result)))
            }
            Err(error) => {
                AppLogger::log_validation_failure(SURFACE, &error);
                let app_error = AppError::from(error);
                Err(match request_id {
                    Some(Extension(id)) => app_error.with_request_id(id.0),
                    None => app_error,
                })
            }
        }
    }

    async fn handle_model() -> Json<ModelResponse> {
        let model = ChangeRateModel::standard();
        Json(ModelResponse {
            coefficients: model,
            unit: change_rate_model::UNIT.to_owned(),
            predictions: model
                .prediction_table()
                .iter()
                .map(PredictionResponse::from)
                .collect(),
        })
    }
}
