//! Canvas surface abstraction.

use kurbo::{Point, Rect};

/// A fixed-size 2D raster target the sketchpad paints on.
///
/// Implementations can wrap a browser 2D context, a software pixel buffer,
/// or anything else that can fill circles and stroke line segments.
/// Colors are CSS color text; an unparsable color must not fail the call.
pub trait CanvasSurface {
    /// Pixel dimensions (width, height).
    fn size(&self) -> (u32, u32);

    /// Fill a disc of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);

    /// Stroke a straight segment of the given total `width`.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str);

    /// Reset every pixel inside `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// The full extent of the surface.
    fn bounds(&self) -> Rect {
        let (width, height) = self.size();
        Rect::new(0.0, 0.0, f64::from(width), f64::from(height))
    }
}

/// A primitive paint operation, as captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCall {
    FillCircle {
        center: Point,
        radius: f64,
        color: String,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        color: String,
    },
    ClearRect(Rect),
}

/// Surface that records paint calls instead of rasterizing them.
///
/// Useful for headless hosts and for checking exactly what a gesture painted.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<PaintCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// All calls recorded so far, oldest first.
    pub fn calls(&self) -> &[PaintCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<PaintCall> {
        std::mem::take(&mut self.calls)
    }
}

impl CanvasSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.calls.push(PaintCall::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str) {
        self.calls.push(PaintCall::StrokeLine {
            from,
            to,
            width,
            color: color.to_string(),
        });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(PaintCall::ClearRect(rect));
    }
}
