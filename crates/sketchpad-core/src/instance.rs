//! The host's record describing one sketchpad.

use crate::error::{Result, SketchError};
use serde::{Deserialize, Serialize};

/// Largest canvas width or height accepted, in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Check that a canvas of `width` x `height` pixels is non-empty and within
/// [`MAX_CANVAS_DIMENSION`] on both axes.
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    let in_range = |d: u32| (1..=MAX_CANVAS_DIMENSION).contains(&d);
    if !(in_range(width) && in_range(height)) {
        return Err(SketchError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Host-owned metadata for one configured drawing surface.
///
/// Read-only here: the host persists it, the sketchpad only sizes its
/// canvas and shows the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchInstance {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for SketchInstance {
    fn default() -> Self {
        Self {
            title: "Sketchpad".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl SketchInstance {
    /// Parse and validate an instance record.
    pub fn from_json(json: &str) -> Result<Self> {
        let instance: Self = serde_json::from_str(json)?;
        instance.validate()?;
        Ok(instance)
    }

    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let instance =
            SketchInstance::from_json(r#"{"title": "Warmup", "width": 640, "height": 480}"#)
                .unwrap();
        assert_eq!(instance.title, "Warmup");
        assert_eq!(instance.width, 640);
        assert_eq!(instance.height, 480);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let result = SketchInstance::from_json(r#"{"title": "x", "width": 0, "height": 480}"#);
        assert!(matches!(
            result,
            Err(SketchError::InvalidDimensions { width: 0, height: 480 })
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let json = format!(
            r#"{{"title": "x", "width": 640, "height": {}}}"#,
            MAX_CANVAS_DIMENSION + 1
        );
        assert!(matches!(
            SketchInstance::from_json(&json),
            Err(SketchError::InvalidDimensions { width: 640, .. })
        ));
        assert!(validate_dimensions(u32::MAX, u32::MAX).is_err());
        assert!(validate_dimensions(MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION).is_ok());
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = SketchInstance::from_json(r#"{"title": "x", "width": 10}"#);
        assert!(matches!(result, Err(SketchError::Json(_))));
    }
}
