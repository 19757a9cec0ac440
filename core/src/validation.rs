//! Input validation functions
//!
//! Presence checks for the calculator plus parsing helpers for hosts that
//! collect raw form text. Presence is the only rule: zero is an accepted
//! value everywhere, and nothing here range-checks measurements.

use crate::calculator::CalculatorInput;
use crate::errors::{CalculatorError, InputField};
use crate::units::UnitSystem;

/// Check that every field the active unit system requires is present
///
/// Violations are collected rather than short-circuited, in a fixed order
/// (age, weight, height) so the message list is stable across runs. Only
/// the height representation matching the active unit system is consulted;
/// the other one may hold a stale value from a unit toggle.
pub fn validate(input: &CalculatorInput) -> Vec<CalculatorError> {
    let mut errors = Vec::new();

    if input.age.is_none() {
        errors.push(CalculatorError::missing(InputField::Age));
    }
    if input.weight.is_none() {
        errors.push(CalculatorError::missing(InputField::Weight));
    }
    match input.unit_system {
        UnitSystem::Metric => {
            if input.height_cm.is_none() {
                errors.push(CalculatorError::missing(InputField::HeightCm));
            }
        }
        UnitSystem::Imperial => {
            // Inches are optional; only the feet component is required.
            if input.height_ft.is_none() {
                errors.push(CalculatorError::missing(InputField::HeightFt));
            }
        }
    }

    errors
}

/// Parse one decimal form field
///
/// Empty or whitespace-only text means the field was not entered and maps
/// to `None`. Anything else must be a finite number; "0" is a present zero.
pub fn parse_decimal_field(raw: &str, field: InputField) -> Result<Option<f64>, CalculatorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CalculatorError::invalid_number(field)),
    }
}

/// Parse the age form field
///
/// Age is a whole number of years; anything that does not parse as an
/// unsigned integer is rejected.
pub fn parse_age_field(raw: &str) -> Result<Option<u32>, CalculatorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| CalculatorError::invalid_number(InputField::Age))
}
