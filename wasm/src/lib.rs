//! TDEE Calculator WASM Module
//!
//! Browser bindings for the calculator. The page keeps form state on its
//! side, passes a JSON snapshot in, and renders whatever comes back; every
//! calculation runs client-side with no server round trip.

use serde::Serialize;
use tdee_calculator_core::activity;
use tdee_calculator_core::calculator::{self, CalculationResult, CalculatorInput};
use wasm_bindgen::prelude::*;

/// Response envelope for [`calculate`]: exactly one side is populated
#[derive(Debug, Serialize)]
struct CalculateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl CalculateResponse {
    fn ok(result: CalculationResult) -> Self {
        Self {
            result: Some(result),
            errors: Vec::new(),
        }
    }

    fn failed(errors: Vec<String>) -> Self {
        Self {
            result: None,
            errors,
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"errors":["Internal serialization error"]}"#.to_string())
    }
}

/// Run one calculation over a JSON-encoded form snapshot
///
/// Expects the `CalculatorInput` shape; absent keys fall back to their
/// defaults. Returns `{"result": {...}}` on success or `{"errors": [...]}`
/// with one human-readable message per violation.
#[wasm_bindgen]
pub fn calculate(input_json: &str) -> String {
    let response = match serde_json::from_str::<CalculatorInput>(input_json) {
        Ok(input) => match calculator::calculate(&input) {
            Ok(result) => CalculateResponse::ok(result),
            Err(errors) => {
                CalculateResponse::failed(errors.iter().map(ToString::to_string).collect())
            }
        },
        Err(err) => CalculateResponse::failed(vec![format!("Invalid input: {}", err)]),
    };
    response.to_json()
}

/// Get the activity level catalog as JSON
///
/// Five entries in presentation order, each with `factor`, `label`, and
/// `description`, ready to feed a selector control.
#[wasm_bindgen]
pub fn activity_levels() -> String {
    serde_json::to_string(&activity::catalog()).unwrap_or_else(|_| "[]".to_string())
}
