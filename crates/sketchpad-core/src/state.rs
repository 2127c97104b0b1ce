//! Mutable drawing state shared by the control panel and stroke renderer.

use crate::config::SketchpadConfig;
use kurbo::Point;

/// Whether a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No pointer is held down.
    #[default]
    Idle,
    /// Pointer is held down; the next move paints from `last_point`.
    Stroking { last_point: Point },
}

/// Brush settings and stroke progress for one sketchpad.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    /// Brush radius in pixels.
    pub brush_size: u32,
    /// CSS color text, passed to the surface untouched.
    pub color: String,
    pub stroke: StrokeState,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

impl DrawingState {
    /// Fresh state using the config's default size and color.
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            brush_size: config.brush.default,
            color: config.default_color.clone(),
            stroke: StrokeState::Idle,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Stroking { .. })
    }

    /// Last recorded pointer position of the active stroke.
    pub fn last_point(&self) -> Option<Point> {
        match self.stroke {
            StrokeState::Idle => None,
            StrokeState::Stroking { last_point } => Some(last_point),
        }
    }
}
