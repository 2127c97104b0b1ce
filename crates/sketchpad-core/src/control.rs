//! Control panel binding: size buttons, clear button and color picker.

use crate::brush::BrushLimits;
use crate::state::DrawingState;
use crate::surface::CanvasSurface;

/// A text display showing the current brush size.
pub trait SizeIndicator {
    fn set_text(&mut self, text: &str);
}

/// Headless indicator that just keeps the last text.
impl SizeIndicator for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Show the current brush size on the indicator.
pub fn refresh_indicator(state: &DrawingState, indicator: &mut impl SizeIndicator) {
    indicator.set_text(&state.brush_size.to_string());
}

/// Grow the brush by one step, capped at the maximum.
pub fn increase_size(
    state: &mut DrawingState,
    limits: &BrushLimits,
    indicator: &mut impl SizeIndicator,
) {
    state.brush_size = limits.grow(state.brush_size);
    log::debug!("Brush size increased to {}", state.brush_size);
    refresh_indicator(state, indicator);
}

/// Shrink the brush by one step, floored at the minimum.
pub fn decrease_size(
    state: &mut DrawingState,
    limits: &BrushLimits,
    indicator: &mut impl SizeIndicator,
) {
    state.brush_size = limits.shrink(state.brush_size);
    log::debug!("Brush size decreased to {}", state.brush_size);
    refresh_indicator(state, indicator);
}

/// Wipe the whole canvas. There is no undo.
pub fn clear(surface: &mut impl CanvasSurface) {
    let bounds = surface.bounds();
    surface.clear_rect(bounds);
    log::debug!("Canvas cleared ({}x{})", bounds.width(), bounds.height());
}

/// Use `value` for subsequent strokes. Not validated.
pub fn set_color(state: &mut DrawingState, value: &str) {
    state.color = value.to_string();
    log::debug!("Brush color set to {}", value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintCall, RecordingSurface};

    #[test]
    fn test_increase_three_times() {
        let mut state = DrawingState::default();
        let mut label = String::new();
        let limits = BrushLimits::default();

        for _ in 0..3 {
            increase_size(&mut state, &limits, &mut label);
        }

        assert_eq!(state.brush_size, 20);
        assert_eq!(label, "20");
    }

    #[test]
    fn test_increase_clamps_at_max() {
        let mut state = DrawingState::default();
        let mut label = String::new();
        let limits = BrushLimits::default();

        for _ in 0..8 {
            increase_size(&mut state, &limits, &mut label);
        }

        assert_eq!(state.brush_size, 40);
        assert_eq!(label, "40");
    }

    #[test]
    fn test_decrease_clamps_at_min() {
        let mut state = DrawingState::default();
        let mut label = String::new();
        let limits = BrushLimits::default();

        decrease_size(&mut state, &limits, &mut label);

        assert_eq!(state.brush_size, 5);
        assert_eq!(label, "5");
    }

    #[test]
    fn test_size_stays_in_range_for_any_sequence() {
        let mut state = DrawingState::default();
        let mut label = String::new();
        let limits = BrushLimits::default();

        // Deterministic pseudo-random up/down walk.
        let mut seed: u32 = 0x9E37_79B9;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 {
                decrease_size(&mut state, &limits, &mut label);
            } else {
                increase_size(&mut state, &limits, &mut label);
            }
            assert!((1..=40).contains(&state.brush_size));
            assert_eq!(label, state.brush_size.to_string());
        }
    }

    #[test]
    fn test_clear_covers_full_extent() {
        let mut surface = RecordingSurface::new(640, 480);
        clear(&mut surface);

        assert_eq!(
            surface.calls(),
            &[PaintCall::ClearRect(kurbo::Rect::new(0.0, 0.0, 640.0, 480.0))]
        );
    }

    #[test]
    fn test_set_color_accepts_anything() {
        let mut state = DrawingState::default();
        set_color(&mut state, "#ff0000");
        assert_eq!(state.color, "#ff0000");
        set_color(&mut state, "not-a-color");
        assert_eq!(state.color, "not-a-color");
    }
}
