//! Energy expenditure calculations
//!
//! BMR via the Mifflin-St Jeor equation, TDEE via the activity factor,
//! and the calorie targets projected from TDEE. Validation and unit
//! normalization run before any formula; every function is pure and
//! nothing here rounds. Formatting for display belongs to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::activity::ActivityLevel;
use crate::errors::CalculatorError;
use crate::units::{feet_inches_to_cm, UnitSystem};
use crate::validation;

// ============================================================================
// Input Types
// ============================================================================

/// Gender as modeled by the Mifflin-St Jeor equation
/// Note: the equation defines offsets for exactly these two categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// One calculation request: a snapshot of the form at submit time
///
/// Numeric fields stay `None` until the user enters something; zero is a
/// present value, not an empty one. Which height fields are read depends
/// on `unit_system`. The inactive representation may hold a stale value
/// left over from a unit toggle and is never consulted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorInput {
    /// Age in whole years
    pub age: Option<u32>,
    pub gender: Gender,
    pub unit_system: UnitSystem,
    /// Weight in kg (metric) or lbs (imperial)
    pub weight: Option<f64>,
    /// Height in centimeters; read only under the metric system
    pub height_cm: Option<f64>,
    /// Feet component of imperial height; read only under imperial
    pub height_ft: Option<f64>,
    /// Inches component of imperial height; optional, absent means zero
    pub height_in: Option<f64>,
    /// Selected activity level
    pub activity: ActivityLevel,
}

// ============================================================================
// Result Types
// ============================================================================

/// Calorie targets projected from TDEE, in kcal/day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargets {
    /// Aggressive cut: 20% deficit
    pub cut_aggressive: f64,
    /// Moderate cut: 15% deficit
    pub cut_moderate: f64,
    /// Maintenance: TDEE unchanged
    pub maintain: f64,
    /// Lean bulk: 5% surplus
    pub bulk_lean: f64,
    /// Strong bulk: 15% surplus
    pub bulk_strong: f64,
}

impl CalorieTargets {
    /// Project the five targets from a TDEE value
    pub fn from_tdee(tdee: f64) -> Self {
        CalorieTargets {
            cut_aggressive: tdee * 0.80,
            cut_moderate: tdee * 0.85,
            // Maintenance is TDEE itself, never a multiple of it
            maintain: tdee,
            bulk_lean: tdee * 1.05,
            bulk_strong: tdee * 1.15,
        }
    }
}

/// Result of one calculation, in kcal/day, unrounded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    /// Calorie targets for each goal
    pub targets: CalorieTargets,
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Run one full calculation over a form snapshot
///
/// Presence violations are all collected up front and reported together;
/// a result is produced only when the list is empty. Past presence,
/// values are taken at face value: out-of-range measurements produce
/// out-of-range calories rather than errors.
pub fn calculate(input: &CalculatorInput) -> Result<CalculationResult, Vec<CalculatorError>> {
    let errors = validation::validate(input);

    // Normalize height from whichever representation the unit system
    // declares active; the other one is ignored entirely.
    let height_cm = match input.unit_system {
        UnitSystem::Metric => input.height_cm,
        UnitSystem::Imperial => input
            .height_ft
            .map(|feet| feet_inches_to_cm(feet, input.height_in.unwrap_or(0.0))),
    };

    match (input.age, input.weight, height_cm) {
        (Some(age), Some(weight), Some(height_cm)) if errors.is_empty() => {
            let weight_kg = input.unit_system.weight_to_kg(weight);
            let bmr = calculate_bmr_mifflin(weight_kg, height_cm, age, input.gender);
            let tdee = bmr * input.activity.factor();
            Ok(CalculationResult {
                bmr,
                tdee,
                targets: CalorieTargets::from_tdee(tdee),
            })
        }
        _ => Err(errors),
    }
}
