// ABOUTME: HTML form route handlers for the heart-rate change prediction page
// ABOUTME: GET / renders the empty form, POST /predict renders a result or a validation message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Form-based prediction routes
//!
//! Validation failures are rendered back into the page with status 400
//! rather than returned as JSON.

use crate::logging::AppLogger;
use crate::pages::PredictionPage;
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use incline_hr_core::{evaluate, PredictionError, PredictionRequest};

const SURFACE: &str = "form";

/// HTML form routes
pub struct PredictionRoutes;

impl PredictionRoutes {
    /// Create the form routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/predict", post(Self::handle_predict))
    }

    /// Render the empty form
    async fn handle_index() -> Html<String> {
        Html(PredictionPage::blank().render())
    }

    /// Evaluate a form submission and render the outcome
    async fn handle_predict(form: Result<Form<PredictionRequest>, FormRejection>) -> Response {
        let request = match form {
            Ok(Form(request)) => request,
            Err(rejection) => {
                let error = PredictionError::unparseable(rejection.body_text());
                return Self::render_error(&error, &PredictionRequest::default());
            }
        };

        match evaluate(&request) {
            Ok(result) => {
                AppLogger::log_prediction(SURFACE, &result);
                (
                    StatusCode::OK,
                    Html(PredictionPage::with_result(&result).render()),
                )
                    .into_response()
            }
            Err(error) => Self::render_error(&error, &request),
        }
    }

    /// Replace a bare timeout or body-limit response with the rendered form
    pub async fn render_interrupted_submission(response: Response) -> Response {
        let status = response.status();
        if status != StatusCode::REQUEST_TIMEOUT && status != StatusCode::PAYLOAD_TOO_LARGE {
            return response;
        }

        let reason = status.canonical_reason().unwrap_or("request interrupted");
        let error = PredictionError::unparseable(reason);
        Self::render_error(&error, &PredictionRequest::default())
    }

    fn render_error(error: &PredictionError, request: &PredictionRequest) -> Response {
        AppLogger::log_validation_failure(SURFACE, error);
        let status = StatusCode::from_u16(error.error_code().http_status())
            .unwrap_or(StatusCode::BAD_REQUEST);
        (
            status,
            Html(PredictionPage::with_error(error, request).render()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use incline_hr_core::constants::user_messages;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[tokio::test]
    async fn test_timeout_renders_malformed_page() {
        let response = PredictionRoutes::render_interrupted_submission(
            StatusCode::REQUEST_TIMEOUT.into_response(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response)
            .await
            .contains(user_messages::MALFORMED_REQUEST));
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let response = PredictionRoutes::render_interrupted_submission(
            (StatusCode::OK, "unchanged").into_response(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "unchanged");
    }
}
