//! Software raster implementation of [`CanvasSurface`] on the AGG scanline
//! rasterizer.

use crate::color::parse_css_color;
use agg_rust::basics::VertexSource;
use agg_rust::color::Rgba8;
use agg_rust::conv_stroke::ConvStroke;
use agg_rust::ellipse::Ellipse;
use agg_rust::math_stroke::LineCap;
use agg_rust::path_storage::PathStorage;
use agg_rust::pixfmt_rgba::PixfmtRgba32;
use agg_rust::rasterizer_scanline_aa::RasterizerScanlineAa;
use agg_rust::renderer_base::RendererBase;
use agg_rust::renderer_scanline::render_scanlines_aa_solid;
use agg_rust::rendering_buffer::RowAccessor;
use agg_rust::scanline_u::ScanlineU8;
use kurbo::{Point, Rect};
use peniko::Color;
use sketchpad_core::{CanvasSurface, Result, SketchError, validate_dimensions};

/// An RGBA8 pixel buffer (straight alpha, row-major) that behaves like a 2D
/// canvas context: source-over compositing, butt line caps, and invalid
/// color text leaves the previous paint color in effect.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    fill_color: Color,
    stroke_color: Color,
}

impl RasterSurface {
    /// Create a fully transparent surface.
    ///
    /// Fails with [`SketchError::InvalidDimensions`] for an empty or
    /// oversized canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_dimensions(width, height)?;
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(SketchError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
        })
    }

    /// Raw RGBA bytes, 4 per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at (x, y), if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel range covering `rect`, clipped to the surface.
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.x0.floor().max(0.0);
        let y0 = rect.y0.floor().max(0.0);
        let x1 = rect.x1.ceil().min(f64::from(self.width));
        let y1 = rect.y1.ceil().min(f64::from(self.height));
        if !(x0 < x1 && y0 < y1) {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Rasterize `path` with non-zero fill and composite it source-over.
    fn render(&mut self, path: &mut impl VertexSource, color: Color) {
        let (width, height) = (self.width, self.height);
        // Dimensions are capped by `validate_dimensions`, so the stride fits.
        let stride = (width * 4) as i32;
        let mut ra = RowAccessor::new();
        // SAFETY: `pixels` holds `height` rows of `stride` bytes and is not
        // touched through `self` while `ra` is alive.
        unsafe { ra.attach(self.pixels.as_mut_ptr(), width, height, stride) };
        let pf = PixfmtRgba32::new(&mut ra);
        let mut rb = RendererBase::new(pf);

        let mut ras = RasterizerScanlineAa::new();
        let mut sl = ScanlineU8::new();
        ras.clip_box(0.0, 0.0, f64::from(width), f64::from(height));
        ras.add_path(path, 0);
        render_scanlines_aa_solid(&mut ras, &mut sl, &mut rb, &to_rgba8(color));
    }

    fn resolve(current: &mut Color, text: &str) -> Color {
        match parse_css_color(text) {
            Some(color) => *current = color,
            None => log::warn!("Ignoring unparsable color {:?}", text),
        }
        *current
    }
}

fn to_rgba8(color: Color) -> Rgba8 {
    let c = color.to_rgba8();
    Rgba8::new(c.r.into(), c.g.into(), c.b.into(), c.a.into())
}

fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

impl CanvasSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        let color = Self::resolve(&mut self.fill_color, color);
        if !(radius > 0.0 && radius.is_finite() && is_finite_point(center)) {
            return;
        }
        let bbox = Rect::from_center_size(center, (radius * 2.0, radius * 2.0));
        if self.pixel_span(bbox).is_none() {
            return;
        }

        // Zero steps lets the ellipse pick a flattening for its radius.
        let mut disc = Ellipse::new(center.x, center.y, radius, radius, 0, false);
        self.render(&mut disc, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str) {
        let color = Self::resolve(&mut self.stroke_color, color);
        if !(width > 0.0 && width.is_finite() && is_finite_point(from) && is_finite_point(to)) {
            return;
        }
        // A zero-length segment with butt caps covers no area.
        if from.distance(to) < f64::EPSILON {
            return;
        }
        let half = width / 2.0;
        let bbox = Rect::from_points(from, to).inflate(half, half);
        if self.pixel_span(bbox).is_none() {
            return;
        }

        let mut path = PathStorage::new();
        path.move_to(from.x, from.y);
        path.line_to(to.x, to.y);
        let mut band = ConvStroke::new(&mut path);
        band.set_line_cap(LineCap::Butt);
        band.set_width(width);
        self.render(&mut band, color);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for y in y0..y1 {
            let start = self.index(x0, y);
            let end = self.index(x1, y);
            if let Some(row) = self.pixels.get_mut(start..end) {
                row.fill(0);
            }
        }
    }
}
