//! Configuration
//!
//! Tunables shared by the layout hints and the view state. Every field has a
//! default, so a configuration document only needs the keys it overrides.
//!
//! # Example
//!
//! ```rust
//! use curriculum_core::config::CurriculumConfig;
//!
//! let config = CurriculumConfig::from_json(r#"{ "chain_depth": 5 }"#).unwrap();
//! assert_eq!(config.chain_depth, 5);
//! assert_eq!(config.layout.column_spacing, 120.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CurriculumError, Result};

/// Spacing used to turn semesters and levels into position hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between semester columns.
    pub column_spacing: f64,

    /// Vertical distance between levels for force anchors.
    pub row_spacing: f64,

    /// Horizontal distance between semester grid columns.
    pub grid_column_spacing: f64,

    /// Vertical distance between semester grid rows.
    pub grid_row_spacing: f64,

    /// Gap between the grid's bounding circle and the elective ring.
    pub elective_ring_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_spacing: 120.0,
            row_spacing: 90.0,
            grid_column_spacing: 220.0,
            grid_row_spacing: 120.0,
            elective_ring_margin: 150.0,
        }
    }
}

impl LayoutConfig {
    /// Reject spacings that would produce non-finite or mirrored positions.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("column_spacing", self.column_spacing),
            ("row_spacing", self.row_spacing),
            ("grid_column_spacing", self.grid_column_spacing),
            ("grid_row_spacing", self.grid_row_spacing),
            ("elective_ring_margin", self.elective_ring_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CurriculumError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// Top-level configuration for the engine and its view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumConfig {
    /// Position hint spacing.
    pub layout: LayoutConfig,

    /// Depth used by prerequisite/dependent chain views.
    pub chain_depth: usize,

    /// Hide, rather than fade, courses outside the current filter.
    pub isolate: bool,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            chain_depth: 3,
            isolate: false,
        }
    }
}

impl CurriculumConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CurriculumConfig::from_json("{}").unwrap();
        assert_eq!(config, CurriculumConfig::default());
    }

    #[test]
    fn nested_layout_overrides() {
        let config =
            CurriculumConfig::from_json(r#"{ "layout": { "row_spacing": 40 }, "isolate": true }"#)
                .unwrap();
        assert_eq!(config.layout.row_spacing, 40.0);
        assert_eq!(config.layout.column_spacing, 120.0);
        assert!(config.isolate);
        assert_eq!(config.layout.grid_column_spacing, 220.0);
        assert_eq!(config.layout.grid_row_spacing, 120.0);
    }

    #[test]
    fn non_finite_ring_margin_is_rejected() {
        let config = LayoutConfig {
            elective_ring_margin: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(CurriculumError::InvalidConfig(_))));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let err = CurriculumConfig::from_json(r#"{ "layout": { "column_spacing": -1 } }"#)
            .unwrap_err();
        assert!(matches!(err, CurriculumError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        let err = CurriculumConfig::from_json("{ chain_depth: 2 }").unwrap_err();
        assert!(matches!(err, CurriculumError::Json(_)));
    }
}
