//! Unit system handling and normalization
//!
//! Input can arrive in metric or imperial units; everything is normalized
//! to SI (kilograms, centimeters) once, before any formula runs. The
//! formulas themselves never see a pound or an inch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram; imperial weight is divided by this on the way in
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Measurement system the input form is currently collecting in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert a weight entered under this system to kilograms
    pub fn weight_to_kg(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value / POUNDS_PER_KILOGRAM,
        }
    }

    /// Get the weight unit abbreviation for this system
    pub fn weight_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

/// Convert an imperial height given as feet plus inches to centimeters
///
/// Both components contribute independently. Treating a missing inches
/// entry as zero is the caller's job, not handled here.
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet * CM_PER_FOOT + inches * CM_PER_INCH
}
