//! Sketchpad Core Library
//!
//! Platform-agnostic drawing state, control panel binding and stroke rendering
//! for an embeddable freehand sketchpad.

pub mod brush;
pub mod config;
pub mod control;
pub mod error;
pub mod event;
pub mod instance;
pub mod sketchpad;
pub mod state;
pub mod stroke;
pub mod surface;

pub use brush::{BRUSH_SIZE_STEP, BrushLimits, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
pub use config::{DEFAULT_COLOR, MountSelectors, SketchpadConfig};
pub use control::SizeIndicator;
pub use error::{Result, SketchError};
pub use event::SketchEvent;
pub use instance::{MAX_CANVAS_DIMENSION, SketchInstance, validate_dimensions};
pub use sketchpad::Sketchpad;
pub use state::{DrawingState, StrokeState};
pub use surface::{CanvasSurface, PaintCall, RecordingSurface};

pub use kurbo::{Point, Rect};
