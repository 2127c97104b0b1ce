//! CSS color text parsing.

use peniko::Color;
use peniko::color::{Srgb, parse_color};

/// Parse CSS color text into an sRGB color.
///
/// Accepts anything CSS Color 4 does: hex, named colors, `rgb()`, `hsl()`,
/// `hwb()`, `lab()` and friends. Other color spaces are converted to sRGB.
/// Returns `None` for text a 2D canvas would ignore.
pub fn parse_css_color(text: &str) -> Option<Color> {
    parse_color(&text.trim().to_ascii_lowercase())
        .ok()
        .map(|color| color.to_alpha_color::<Srgb>())
}
