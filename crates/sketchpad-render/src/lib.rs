//! Sketchpad Render Library
//!
//! Software rasterization of sketchpad paint calls into an RGBA pixel buffer,
//! plus CSS color parsing shared by the hosts.

mod color;
mod raster;

pub use color::parse_css_color;
pub use raster::RasterSurface;
