//! Brush size limits.

use crate::error::{Result, SketchError};
use serde::{Deserialize, Serialize};

/// Smallest brush size a sketchpad starts with and can shrink to.
pub const MIN_BRUSH_SIZE: u32 = 5;
/// Largest brush size.
pub const MAX_BRUSH_SIZE: u32 = 40;
/// Amount a single size control click changes the brush by.
pub const BRUSH_SIZE_STEP: u32 = 5;

/// Bounds and step for the brush radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushLimits {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    /// Size a fresh sketchpad starts with.
    pub default: u32,
}

impl Default for BrushLimits {
    fn default() -> Self {
        Self {
            min: MIN_BRUSH_SIZE,
            max: MAX_BRUSH_SIZE,
            step: BRUSH_SIZE_STEP,
            default: MIN_BRUSH_SIZE,
        }
    }
}

impl BrushLimits {
    /// Check that the limits describe a usable, non-empty range.
    ///
    /// A zero minimum is rejected since a zero radius paints nothing.
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(SketchError::InvalidConfig(
                "brush minimum must be at least 1".to_string(),
            ));
        }
        if self.min > self.max {
            return Err(SketchError::InvalidConfig(format!(
                "brush minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        if self.step == 0 {
            return Err(SketchError::InvalidConfig(
                "brush step must be non-zero".to_string(),
            ));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(SketchError::InvalidConfig(format!(
                "default brush size {} outside {}..={}",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }

    /// The next larger size, capped at the maximum.
    pub fn grow(&self, size: u32) -> u32 {
        size.saturating_add(self.step).min(self.max)
    }

    /// The next smaller size, floored at the minimum.
    pub fn shrink(&self, size: u32) -> u32 {
        size.saturating_sub(self.step).max(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_are_valid() {
        assert!(BrushLimits::default().validate().is_ok());
    }

    #[test]
    fn test_grow_caps_at_max() {
        let limits = BrushLimits::default();
        assert_eq!(limits.grow(35), 40);
        assert_eq!(limits.grow(40), 40);
        assert_eq!(limits.grow(38), 40);
    }

    #[test]
    fn test_shrink_floors_at_min() {
        let limits = BrushLimits::default();
        assert_eq!(limits.shrink(10), 5);
        assert_eq!(limits.shrink(5), 5);
        assert_eq!(limits.shrink(7), 5);
    }

    #[test]
    fn test_rejects_zero_min() {
        let limits = BrushLimits {
            min: 0,
            ..BrushLimits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let limits = BrushLimits {
            min: 30,
            max: 10,
            default: 20,
            ..BrushLimits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_step_and_stray_default() {
        let zero_step = BrushLimits {
            step: 0,
            ..BrushLimits::default()
        };
        assert!(zero_step.validate().is_err());

        let stray_default = BrushLimits {
            default: 45,
            ..BrushLimits::default()
        };
        assert!(stray_default.validate().is_err());
    }
}
