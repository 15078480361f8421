// ABOUTME: Categorical inputs (exercise type, incline direction) and their 0/1 indicators
// ABOUTME: Exhaustive label tables drive parsing, display, and the encode() mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

use crate::constants::form_fields;
use crate::errors::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A two-valued category that enters the model as a binary indicator.
///
/// `TABLE` lists every accepted label; parsing goes through it and nothing else.
pub trait BinaryCategory: Copy + Sized + 'static {
    /// Which input this category fills
    const KIND: CategoryKind;

    /// Every accepted label paired with its variant
    const TABLE: [(&'static str, Self); 2];

    /// The 0/1 indicator used by the model
    fn indicator(self) -> u8;

    /// Canonical label of this variant
    fn label(self) -> &'static str;

    /// Decode a submitted label.
    ///
    /// Matching is exact: no case folding, no trimming.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::InvalidCategory` if `value` is not in `TABLE`.
    fn from_label(value: &str) -> Result<Self, PredictionError> {
        Self::TABLE
            .iter()
            .find(|(label, _)| *label == value)
            .map(|(_, category)| *category)
            .ok_or_else(|| PredictionError::invalid_category(Self::KIND, value))
    }
}

/// Type of exercise being performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ExerciseType {
    /// Walking (indicator 1)
    Walk = 1,
    /// Running (indicator 0, the reference level)
    Run = 0,
}

/// Direction of the incline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum InclineDirection {
    /// Uphill (indicator 1)
    Up = 1,
    /// Downhill (indicator 0, the reference level)
    Down = 0,
}

impl BinaryCategory for ExerciseType {
    const KIND: CategoryKind = CategoryKind::Exercise;
    const TABLE: [(&'static str, Self); 2] = [("walk", Self::Walk), ("run", Self::Run)];

    fn indicator(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Run => "run",
        }
    }
}

impl BinaryCategory for InclineDirection {
    const KIND: CategoryKind = CategoryKind::Incline;
    const TABLE: [(&'static str, Self); 2] = [("up", Self::Up), ("down", Self::Down)];

    fn indicator(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl FromStr for ExerciseType {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl FromStr for InclineDirection {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for InclineDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which categorical input a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// `exerciseType`: walk / run
    Exercise,
    /// `inclineDirection`: up / down
    Incline,
}

impl CategoryKind {
    /// Name of the form field carrying this input
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Exercise => form_fields::EXERCISE_TYPE,
            Self::Incline => form_fields::INCLINE_DIRECTION,
        }
    }

    /// Accepted labels, indicator 1 first
    #[must_use]
    pub fn labels(self) -> [&'static str; 2] {
        match self {
            Self::Exercise => ExerciseType::TABLE.map(|(label, _)| label),
            Self::Incline => InclineDirection::TABLE.map(|(label, _)| label),
        }
    }
}

/// Map a submitted label to its binary indicator.
///
/// | kind     | `1`    | `0`    |
/// |----------|--------|--------|
/// | Exercise | `walk` | `run`  |
/// | Incline  | `up`   | `down` |
///
/// # Errors
///
/// Returns `PredictionError::InvalidCategory` for any other value.
pub fn encode(value: &str, kind: CategoryKind) -> Result<u8, PredictionError> {
    match kind {
        CategoryKind::Exercise => ExerciseType::from_label(value).map(ExerciseType::indicator),
        CategoryKind::Incline => InclineDirection::from_label(value).map(InclineDirection::indicator),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_exercise() {
        assert_eq!(encode("walk", CategoryKind::Exercise), Ok(1));
        assert_eq!(encode("run", CategoryKind::Exercise), Ok(0));
        assert_eq!(
            encode("jog", CategoryKind::Exercise),
            Err(PredictionError::invalid_category(CategoryKind::Exercise, "jog"))
        );
    }

    #[test]
    fn test_encode_incline() {
        assert_eq!(encode("up", CategoryKind::Incline), Ok(1));
        assert_eq!(encode("down", CategoryKind::Incline), Ok(0));
        assert!(encode("sideways", CategoryKind::Incline).is_err());
    }

    #[test]
    fn test_labels_are_not_shared_across_kinds() {
        assert!(encode("up", CategoryKind::Exercise).is_err());
        assert!(encode("walk", CategoryKind::Incline).is_err());
    }

    #[test]
    fn test_matching_is_exact() {
        assert!("Walk".parse::<ExerciseType>().is_err());
        assert!(" run".parse::<ExerciseType>().is_err());
        assert!("UP".parse::<InclineDirection>().is_err());
        assert!("".parse::<InclineDirection>().is_err());
    }

    #[test]
    fn test_table_round_trips_through_label() {
        for (label, exercise) in ExerciseType::TABLE {
            assert_eq!(exercise.label(), label);
            assert_eq!(exercise.to_string(), label);
        }
        for (label, incline) in InclineDirection::TABLE {
            assert_eq!(incline.label(), label);
            assert_eq!(label.parse::<InclineDirection>(), Ok(incline));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&ExerciseType::Walk).unwrap();
        assert_eq!(json, "\"walk\"");
        let incline: InclineDirection = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(incline, InclineDirection::Down);
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(CategoryKind::Exercise.field_name(), "exerciseType");
        assert_eq!(CategoryKind::Incline.field_name(), "inclineDirection");
        assert_eq!(CategoryKind::Exercise.labels(), ["walk", "run"]);
        assert_eq!(CategoryKind::Incline.labels(), ["up", "down"]);
    }
}
