// ABOUTME: Data models for the two categorical inputs of the change-rate model
// ABOUTME: Re-exports the category enums and the binary encoding function

/// Exercise type and incline direction categories
pub mod category;

pub use category::{encode, BinaryCategory, CategoryKind, ExerciseType, InclineDirection};
