//! Separable blend modes from the W3C compositing spec.
//!
//! `backdrop` is the lower layer, `source` the layer painted on top. Both are
//! channel values in 0.0–1.0.

use crate::color::Rgb;
use crate::gradient::BlendMode;

fn multiply(backdrop: f64, source: f64) -> f64 {
    backdrop * source
}

fn screen(backdrop: f64, source: f64) -> f64 {
    backdrop + source - backdrop * source
}

fn hard_light(backdrop: f64, source: f64) -> f64 {
    if source <= 0.5 {
        multiply(backdrop, 2.0 * source)
    } else {
        screen(backdrop, 2.0 * source - 1.0)
    }
}

fn color_burn(backdrop: f64, source: f64) -> f64 {
    if backdrop >= 1.0 {
        1.0
    } else if source <= 0.0 {
        0.0
    } else {
        1.0 - ((1.0 - backdrop) / source).min(1.0)
    }
}

impl BlendMode {
    /// Blend a single channel.
    pub fn blend_channel(&self, backdrop: f64, source: f64) -> f64 {
        match self {
            BlendMode::Screen => screen(backdrop, source),
            BlendMode::Overlay => hard_light(source, backdrop),
            BlendMode::HardLight => hard_light(backdrop, source),
            BlendMode::ColorBurn => color_burn(backdrop, source),
        }
    }

    /// Blend two opaque colors channel by channel.
    pub fn blend(&self, backdrop: Rgb, source: Rgb) -> Rgb {
        let (br, bg, bb) = backdrop.to_f64();
        let (sr, sg, sb) = source.to_f64();
        Rgb::from_f64(
            self.blend_channel(br, sr),
            self.blend_channel(bg, sg),
            self.blend_channel(bb, sb),
        )
    }
}
