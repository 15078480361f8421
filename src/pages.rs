// ABOUTME: Server-rendered HTML for the prediction form, result, and error states
// ABOUTME: Fills the compile-time embedded index template with escaped values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

use crate::utils::html::{escape_html_attribute, escape_html_text};
use incline_hr_core::{
    BinaryCategory, ExerciseType, InclineDirection, PredictionError, PredictionRequest,
    PredictionResult,
};

/// Index template embedded at compile-time
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

const CHECKED: &str = " checked";

/// What the page reports below the form
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Blank,
    Result(PredictionResult),
    Error(&'static str),
}

/// One rendering of the prediction page
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPage {
    outcome: Outcome,
    exercise_type: Option<String>,
    incline_direction: Option<String>,
}

impl PredictionPage {
    /// Empty form, nothing selected
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            outcome: Outcome::Blank,
            exercise_type: None,
            incline_direction: None,
        }
    }

    /// Form with the prediction and the inputs that produced it
    #[must_use]
    pub fn with_result(result: &PredictionResult) -> Self {
        Self {
            outcome: Outcome::Result(*result),
            exercise_type: Some(result.exercise_type.label().to_owned()),
            incline_direction: Some(result.incline_direction.label().to_owned()),
        }
    }

    /// Form with the user-facing validation message; valid selections stay checked
    #[must_use]
    pub fn with_error(error: &PredictionError, request: &PredictionRequest) -> Self {
        Self {
            outcome: Outcome::Error(error.user_message()),
            exercise_type: request.exercise_type.clone(),
            incline_direction: request.incline_direction.clone(),
        }
    }

    /// Whether this page reports a validation error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    /// Render the full HTML document
    #[must_use]
    pub fn render(&self) -> String {
        let exercise = self.exercise_type.as_deref();
        let incline = self.incline_direction.as_deref();

        INDEX_TEMPLATE
            .replace(
                "{{EXERCISE_WALK_CHECKED}}",
                checked_if(exercise, ExerciseType::Walk.label()),
            )
            .replace(
                "{{EXERCISE_RUN_CHECKED}}",
                checked_if(exercise, ExerciseType::Run.label()),
            )
            .replace(
                "{{INCLINE_UP_CHECKED}}",
                checked_if(incline, InclineDirection::Up.label()),
            )
            .replace(
                "{{INCLINE_DOWN_CHECKED}}",
                checked_if(incline, InclineDirection::Down.label()),
            )
            .replace("{{RESULT_BLOCK}}", &self.result_block())
            .replace("{{ERROR_BLOCK}}", &self.error_block())
            .replace(
                "{{VERSION}}",
                &escape_html_text(env!("CARGO_PKG_VERSION")),
            )
    }

    fn result_block(&self) -> String {
        let Outcome::Result(result) = &self.outcome else {
            return String::new();
        };

        format!(
            r#"<div class="result" id="result">
            <div>Predicted change rate</div>
            <div class="value" data-bpm="{bpm}">{formatted}</div>
            <div>Exercise type: {exercise} ({exercise_indicator})</div>
            <div>Incline direction: {incline} ({incline_indicator})</div>
        </div>"#,
            bpm = escape_html_attribute(&format!("{:.2}", result.change_rate_bpm)),
            formatted = escape_html_text(&result.formatted()),
            exercise = escape_html_text(result.exercise_type.label()),
            exercise_indicator = result.exercise_indicator(),
            incline = escape_html_text(result.incline_direction.label()),
            incline_indicator = result.incline_indicator(),
        )
    }

    fn error_block(&self) -> String {
        let Outcome::Error(message) = &self.outcome else {
            return String::new();
        };

        format!(
            r#"<div class="error" id="error" role="alert">{}</div>"#,
            escape_html_text(message)
        )
    }
}

impl Default for PredictionPage {
    fn default() -> Self {
        Self::blank()
    }
}

/// Only an exact label match re-checks a radio button, so submitted text never reaches the markup
fn checked_if(selected: Option<&str>, label: &str) -> &'static str {
    if selected == Some(label) {
        CHECKED
    } else {
        ""
    }
}
