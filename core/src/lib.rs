//! TDEE Calculator Core Library
//!
//! This crate contains the calculation engine shared by every frontend:
//! input types, validation, unit normalization, and the BMR/TDEE formulas.
//! All state lives in the caller; every function here is pure.

pub mod activity;
pub mod calculator;
pub mod errors;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use activity::*;
pub use calculator::*;
pub use errors::*;
pub use units::*;
