//! Sketchpad configuration supplied by the host page.

use crate::brush::BrushLimits;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Color a fresh sketchpad paints with.
pub const DEFAULT_COLOR: &str = "black";

/// CSS selectors locating the host markup the sketchpad binds to.
///
/// The sketchpad never creates these elements itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountSelectors {
    pub canvas: String,
    pub size_label: String,
    pub increase: String,
    pub decrease: String,
    pub clear: String,
    pub color: String,
}

impl Default for MountSelectors {
    fn default() -> Self {
        Self {
            canvas: "#mod_sketchpad_canvas".to_string(),
            size_label: "#mod_sketchpad_size".to_string(),
            increase: "[data-action=\"increase\"]".to_string(),
            decrease: "[data-action=\"decrease\"]".to_string(),
            clear: "[data-action=\"clear\"]".to_string(),
            color: "[data-action=\"color\"]".to_string(),
        }
    }
}

/// Runtime configuration of one sketchpad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub brush: BrushLimits,
    pub default_color: String,
    /// End an open stroke when the window loses focus.
    pub release_on_blur: bool,
    pub selectors: MountSelectors,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            brush: BrushLimits::default(),
            default_color: DEFAULT_COLOR.to_string(),
            release_on_blur: false,
            selectors: MountSelectors::default(),
        }
    }
}

impl SketchpadConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.brush.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SketchpadConfig::from_json(r#"{"default_color": "red"}"#).unwrap();
        assert_eq!(config.default_color, "red");
        assert_eq!(config.brush, BrushLimits::default());
        assert_eq!(config.selectors.canvas, "#mod_sketchpad_canvas");
        assert!(!config.release_on_blur);
    }

    #[test]
    fn test_nested_partial_brush() {
        let config = SketchpadConfig::from_json(r#"{"brush": {"max": 60}}"#).unwrap();
        assert_eq!(config.brush.max, 60);
        assert_eq!(config.brush.min, 5);
        assert_eq!(config.brush.step, 5);
    }

    #[test]
    fn test_invalid_brush_rejected() {
        let result = SketchpadConfig::from_json(r#"{"brush": {"min": 0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(SketchpadConfig::from_json("{not json").is_err());
    }
}
