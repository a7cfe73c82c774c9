//! Software rendering of the gradient preview.
//!
//! The linear gradient follows CSS angle semantics: 0deg points up, 90deg
//! points right, and the gradient line is long enough that the corners
//! get the exact endpoint colors. In checkered style the checker layer is
//! blended on top of the gradient with the selected blend mode, the way
//! `background-blend-mode` composites the first background layer.

use crate::checkerboard::checker_color_at;
use crate::color::Rgb;
use crate::gradient::{GradientDescriptor, GradientStyle};
use crate::surface::{PixelBuffer, Surface};

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let (ar, ag, ab) = a.to_f64();
    let (br, bg, bb) = b.to_f64();
    Rgb::from_f64(ar + (br - ar) * t, ag + (bg - ag) * t, ab + (bb - ab) * t)
}

/// Position along the gradient line (0.0 at `start`, 1.0 at `end`) for each pixel.
struct GradientLine {
    dir_x: f64,
    dir_y: f64,
    length: f64,
    center_x: f64,
    center_y: f64,
}

impl GradientLine {
    fn new(width: u32, height: u32, angle_deg: u16) -> Self {
        let a = (angle_deg as f64).to_radians();
        let (sin, cos) = a.sin_cos();
        let (w, h) = (width as f64, height as f64);
        Self {
            dir_x: sin,
            dir_y: -cos,
            length: (w * sin).abs() + (h * cos).abs(),
            center_x: w / 2.0,
            center_y: h / 2.0,
        }
    }

    fn position(&self, px: u32, py: u32) -> f64 {
        if self.length <= 0.0 {
            return 0.0;
        }
        let dx = px as f64 + 0.5 - self.center_x;
        let dy = py as f64 + 0.5 - self.center_y;
        ((dx * self.dir_x + dy * self.dir_y) / self.length + 0.5).clamp(0.0, 1.0)
    }
}

/// Paint the preview onto any surface.
pub fn paint_preview<S: Surface + ?Sized>(
    surface: &mut S,
    start: Rgb,
    end: Rgb,
    desc: &GradientDescriptor,
) {
    let (w, h) = (surface.width(), surface.height());
    let line = GradientLine::new(w, h, desc.angle());
    for py in 0..h {
        for px in 0..w {
            let gradient = lerp(start, end, line.position(px, py));
            let color = match desc.style {
                GradientStyle::Linear => gradient,
                GradientStyle::Checkered => desc.blend_mode.blend(gradient, checker_color_at(px, py)),
            };
            surface.set_pixel(px as i64, py as i64, color);
        }
    }
}

/// Render the preview into a new RGBA8 buffer.
pub fn render_preview(width: u32, height: u32, start: Rgb, end: Rgb, desc: &GradientDescriptor) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    paint_preview(&mut buf, start, end, desc);
    buf
}
