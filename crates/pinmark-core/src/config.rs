//! Tunables for the drawing core.

use crate::error::ConfigError;
use crate::shapes::Polygon;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Double-click detection window.
pub const DOUBLE_CLICK_TIME_MS: u64 = 500;
/// Maximum pointer travel between the two presses of a double click.
pub const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Configuration for an annotation session.
///
/// Every field has a default, so a host can supply a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Rectangles commit only when both sides are strictly larger than this.
    pub min_rectangle_size: f64,
    /// Polygons commit only with at least this many vertices.
    pub min_polygon_vertices: usize,
    /// Prefix of generated labels ("Annotation 1", "Annotation 2", ...).
    pub label_prefix: String,
    /// Tool active when a session starts.
    pub default_tool: ToolKind,
    /// Double-click time window in milliseconds.
    pub double_click_ms: u64,
    /// Double-click distance tolerance in device pixels.
    pub double_click_distance: f64,
    /// Extra reach, in surface pixels, when clicking an annotation to select it.
    pub hit_tolerance: f64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            min_rectangle_size: 2.0,
            min_polygon_vertices: Polygon::MIN_VERTICES,
            label_prefix: "Annotation".to_string(),
            default_tool: ToolKind::Rectangle,
            double_click_ms: DOUBLE_CLICK_TIME_MS,
            double_click_distance: DOUBLE_CLICK_DISTANCE,
            hit_tolerance: 4.0,
        }
    }
}

impl AnnotatorConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the drawing machine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_polygon_vertices < Polygon::MIN_VERTICES {
            return Err(ConfigError::Invalid(format!(
                "min_polygon_vertices must be at least {}, got {}",
                Polygon::MIN_VERTICES,
                self.min_polygon_vertices
            )));
        }
        let non_negative = [
            ("min_rectangle_size", self.min_rectangle_size),
            ("double_click_distance", self.double_click_distance),
            ("hit_tolerance", self.hit_tolerance),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnnotatorConfig::default();
        assert!((config.min_rectangle_size - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.min_polygon_vertices, 3);
        assert_eq!(config.label_prefix, "Annotation");
        assert_eq!(config.default_tool, ToolKind::Rectangle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"label_prefix": "Grain", "default_tool": "polygon"}"#;
        let config = AnnotatorConfig::from_json(json).unwrap();
        assert_eq!(config.label_prefix, "Grain");
        assert_eq!(config.default_tool, ToolKind::Polygon);
        assert_eq!(config.min_polygon_vertices, 3);
    }

    #[test]
    fn test_rejects_too_few_polygon_vertices() {
        let err = AnnotatorConfig::from_json(r#"{"min_polygon_vertices": 2}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_size() {
        let err = AnnotatorConfig::from_json(r#"{"min_rectangle_size": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AnnotatorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = AnnotatorConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(AnnotatorConfig::from_json(&json).unwrap(), config);
    }
}
