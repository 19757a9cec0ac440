//! Activity level catalog
//!
//! The five-entry scale that turns BMR into TDEE. The catalog is fixed
//! configuration: selectors enumerate it in order, the calculator reads
//! the chosen factor, and nothing edits it at runtime.

use serde::{Deserialize, Serialize};

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise, desk job
    #[default]
    Sedentary,
    /// Light exercise/sports 1-3 days/week
    LightlyActive,
    /// Moderate exercise/sports 3-5 days/week
    ModeratelyActive,
    /// Hard exercise/sports 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job, or training 2x/day
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in presentation order, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the multiplier applied to BMR for this level
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get the short label shown in selectors
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }

    /// Get the longer description shown alongside the label
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise, desk job",
            ActivityLevel::LightlyActive => "Light exercise/sports 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise/sports 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise/sports 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise, physical job, or training 2x/day",
        }
    }

    /// Resolve a raw multiplier back to its catalog entry
    ///
    /// Form controls often carry the factor as a plain number; only the
    /// five exact catalog values resolve, anything else is rejected.
    pub fn from_factor(factor: f64) -> Option<ActivityLevel> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.factor() == factor)
    }

    /// Get this level as a catalog row for presentation layers
    pub fn entry(&self) -> ActivityLevelEntry {
        ActivityLevelEntry {
            factor: self.factor(),
            label: self.label(),
            description: self.description(),
        }
    }
}

/// One catalog row as presentation layers consume it
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLevelEntry {
    pub factor: f64,
    pub label: &'static str,
    pub description: &'static str,
}

/// Get the full catalog as rows, in presentation order
pub fn catalog() -> [ActivityLevelEntry; 5] {
    ActivityLevel::ALL.map(|level| level.entry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factors_match_catalog() {
        assert_eq!(ActivityLevel::Sedentary.factor(), 1.2);
        assert_eq!(ActivityLevel::LightlyActive.factor(), 1.375);
        assert_eq!(ActivityLevel::ModeratelyActive.factor(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.factor(), 1.725);
        assert_eq!(ActivityLevel::ExtraActive.factor(), 1.9);
    }

    #[test]
    fn test_catalog_order_is_least_to_most_active() {
        assert_eq!(ActivityLevel::ALL[0], ActivityLevel::Sedentary);
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        let mut sorted = factors.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(factors, sorted);
    }

    #[test]
    fn test_default_is_sedentary() {
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_from_factor_resolves_every_catalog_value() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_factor(level.factor()), Some(level));
        }
    }

    #[test]
    fn test_from_factor_rejects_unknown_values() {
        assert_eq!(ActivityLevel::from_factor(1.0), None);
        assert_eq!(ActivityLevel::from_factor(1.3751), None);
        assert_eq!(ActivityLevel::from_factor(0.0), None);
    }

    #[test]
    fn test_labels_and_descriptions_are_distinct() {
        let labels: HashSet<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();
        let descriptions: HashSet<&str> =
            ActivityLevel::ALL.iter().map(|l| l.description()).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(descriptions.len(), 5);
    }

    #[test]
    fn test_catalog_rows_mirror_levels() {
        let rows = catalog();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].label, "Sedentary");
        assert_eq!(rows[0].description, "Little or no exercise, desk job");
        assert_eq!(rows[4].factor, 1.9);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ActivityLevel::LightlyActive).unwrap();
        assert_eq!(json, "\"lightly_active\"");
        let back: ActivityLevel = serde_json::from_str("\"extra_active\"").unwrap();
        assert_eq!(back, ActivityLevel::ExtraActive);
    }
}
