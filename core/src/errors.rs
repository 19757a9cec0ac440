//! Error types for the TDEE calculator

use thiserror::Error;

/// Input fields referenced by validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Age,
    Weight,
    HeightCm,
    HeightFt,
    HeightIn,
}

impl InputField {
    /// Get the user-facing label, exactly as it appears in error messages
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Age => "Age",
            InputField::Weight => "Weight",
            InputField::HeightCm => "Height",
            InputField::HeightFt => "Height (ft)",
            InputField::HeightIn => "Height (in)",
        }
    }
}

/// Validation errors reported against a calculation request
///
/// A submission can violate several rules at once; callers receive every
/// violation together rather than one at a time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// A field required by the active unit system was left empty
    #[error("{} is required", .field.label())]
    MissingRequiredField { field: InputField },

    /// A present text field held something that is not a number
    #[error("{} must be a number", .field.label())]
    InvalidNumber { field: InputField },
}

impl CalculatorError {
    pub fn missing(field: InputField) -> Self {
        CalculatorError::MissingRequiredField { field }
    }

    pub fn invalid_number(field: InputField) -> Self {
        CalculatorError::InvalidNumber { field }
    }
}
