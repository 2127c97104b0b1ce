//! Input events a host feeds into a sketchpad.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer or control panel event, in canvas pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SketchEvent {
    /// Pointer pressed inside the canvas.
    PointerDown(Point),
    /// Pointer moved over the canvas.
    PointerMove(Point),
    /// Pointer released anywhere.
    PointerUp,
    /// The host lost track of the pointer (e.g. window blur).
    PointerCancel,
    /// Increase-size control activated.
    SizeUp,
    /// Decrease-size control activated.
    SizeDown,
    /// Clear control activated.
    Clear,
    /// Color picker changed.
    ColorChange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let event: SketchEvent = serde_json::from_str(r#"{"ColorChange": "blue"}"#).unwrap();
        assert_eq!(event, SketchEvent::ColorChange("blue".to_string()));

        let event: SketchEvent = serde_json::from_str(r#""SizeUp""#).unwrap();
        assert_eq!(event, SketchEvent::SizeUp);
    }
}
