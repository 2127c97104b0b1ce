//! Stroke rendering: turns a pointer drag into circles and line segments.
//!
//! Pointer moves only report where the pointer is now, not the path it took,
//! so each move paints a disc at the new position plus a segment back to the
//! previous one. The disc caps the segment so consecutive segments join
//! without gaps.

use crate::state::{DrawingState, StrokeState};
use crate::surface::CanvasSurface;
use kurbo::Point;

/// Begin a stroke at `point`.
pub fn pointer_down(state: &mut DrawingState, point: Point) {
    state.stroke = StrokeState::Stroking { last_point: point };
    log::debug!("Stroke started at ({}, {})", point.x, point.y);
}

/// Continue the active stroke to `point`.
///
/// Returns `true` if anything was painted. Moves outside a stroke are ignored.
pub fn pointer_move(
    state: &mut DrawingState,
    surface: &mut impl CanvasSurface,
    point: Point,
) -> bool {
    let StrokeState::Stroking { last_point } = state.stroke else {
        return false;
    };

    let radius = f64::from(state.brush_size);
    surface.fill_circle(point, radius, &state.color);
    surface.stroke_line(last_point, point, radius * 2.0, &state.color);

    state.stroke = StrokeState::Stroking { last_point: point };
    true
}

/// End the active stroke, if any.
pub fn pointer_up(state: &mut DrawingState) {
    if state.is_drawing() {
        log::debug!("Stroke ended");
    }
    state.stroke = StrokeState::Idle;
}

/// Force-close a stroke whose pointer-up will never arrive (e.g. focus lost).
pub fn cancel(state: &mut DrawingState) {
    if state.is_drawing() {
        log::debug!("Stroke cancelled");
    }
    state.stroke = StrokeState::Idle;
}
