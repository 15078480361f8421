// ABOUTME: Integration tests for the prediction engine public API
// ABOUTME: Checks formula values, determinism, positivity, and validation ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use incline_hr_core::{
    encode, evaluate, predict, CategoryKind, ChangeRateModel, ErrorCode, ExerciseType,
    InclineDirection, PredictionError, PredictionRequest,
};

#[test]
fn test_formula_matches_closed_form() {
    for exercise in 0..=1_u8 {
        for incline in 0..=1_u8 {
            let x = f64::from(exercise);
            let y = f64::from(incline);
            let expected =
                (2.3695 - 0.7421 * x + 0.6865 * y + 0.4139 * x * y + 0.281_f64.ln()).exp();
            let actual = predict(exercise, incline);
            assert!(
                (actual - expected).abs() < 1e-12,
                "{exercise}/{incline}: {actual} != {expected}"
            );
        }
    }
}

#[test]
fn test_predictions_are_deterministic_and_positive() {
    for exercise in 0..=1_u8 {
        for incline in 0..=1_u8 {
            let first = predict(exercise, incline);
            let second = predict(exercise, incline);
            assert_eq!(first.to_bits(), second.to_bits());
            assert!(first > 0.0);
        }
    }
}

#[test]
fn test_concrete_values() {
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
fn test_uphill_is_faster_than_downhill() {
    for exercise in 0..=1_u8 {
        assert!(predict(exercise, 1) > predict(exercise, 0));
    }
}

#[test]
fn test_encode_matches_indicator_convention() {
    assert_eq!(encode("walk", CategoryKind::Exercise).unwrap(), 1);
    assert_eq!(encode("run", CategoryKind::Exercise).unwrap(), 0);
    assert_eq!(encode("up", CategoryKind::Incline).unwrap(), 1);
    assert_eq!(encode("down", CategoryKind::Incline).unwrap(), 0);
    assert!(encode("up", CategoryKind::Exercise).is_err());
    assert!(encode("", CategoryKind::Incline).is_err());
}

#[test]
fn test_evaluate_rejects_jog() {
    let error = evaluate(&PredictionRequest::new("jog", "up")).unwrap_err();
    assert!(matches!(
        error,
        PredictionError::InvalidCategory {
            kind: CategoryKind::Exercise,
            ..
        }
    ));
    assert_eq!(error.error_code(), ErrorCode::InvalidInput);
}

#[test]
fn test_evaluate_rejects_sideways() {
    let error = evaluate(&PredictionRequest::new("walk", "sideways")).unwrap_err();
    assert!(matches!(
        error,
        PredictionError::InvalidCategory {
            kind: CategoryKind::Incline,
            ..
        }
    ));
}

#[test]
fn test_missing_field_is_malformed_and_distinct() {
    let request = PredictionRequest {
        exercise_type: Some("walk".to_owned()),
        incline_direction: None,
    };
    let missing = evaluate(&request).unwrap_err();
    let invalid = evaluate(&PredictionRequest::new("walk", "sideways")).unwrap_err();

    assert!(matches!(missing, PredictionError::MalformedRequest { .. }));
    assert_eq!(missing.error_code(), ErrorCode::MissingRequiredField);
    assert_ne!(missing.user_message(), invalid.user_message());
}

#[test]
fn test_prediction_request_accepts_legacy_json_names() {
    let request: PredictionRequest =
        serde_json::from_str(r#"{"ExerciseTypewalk": "run", "InclineRateup": "up"}"#).unwrap();
    assert_eq!(evaluate(&request).unwrap().formatted(), "5.97 BPM");
}
