//! Color wheel rasterization and pointer mapping.
//!
//! Angle around the center maps to hue via `(atan2(y, x) + π) / 2π`, so hue 0
//! sits on the negative x axis. Distance from the center maps to saturation.
//! Value is always 1.0 on the wheel; the brightness slider owns value.

use std::f64::consts::PI;

use crate::color::{Hsv, Rgb};
use crate::constants;
use crate::surface::Surface;

/// Center and radius of the wheel inside a canvas of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl WheelGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: width.min(height) / 2.0 - constants::WHEEL_MARGIN,
        }
    }

    /// Hue/saturation for an offset from the center, or `None` outside the wheel.
    fn hsv_at_offset(&self, dx: f64, dy: f64) -> Option<Hsv> {
        if self.radius <= 0.0 {
            return None;
        }
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > self.radius {
            return None;
        }
        let hue = (dy.atan2(dx) + PI) / (2.0 * PI);
        let saturation = (distance / self.radius).min(1.0);
        Some(Hsv::new(hue, saturation, 1.0))
    }

    /// Canvas position of a hue/saturation pair; the inverse of the pointer mapping.
    pub fn position_of(&self, hsv: Hsv) -> (f64, f64) {
        let angle = hsv.h * 2.0 * PI - PI;
        let r = hsv.s.clamp(0.0, 1.0) * self.radius.max(0.0);
        (self.center_x + angle.cos() * r, self.center_y + angle.sin() * r)
    }
}

/// Paint the wheel pixel by pixel. Pixels outside the radius are left untouched.
pub fn draw_color_wheel<S: Surface + ?Sized>(surface: &mut S) {
    let (w, h) = (surface.width(), surface.height());
    let geometry = WheelGeometry::new(w as f64, h as f64);
    surface.clear();

    for py in 0..h {
        let dy = py as f64 - geometry.center_y;
        for px in 0..w {
            let dx = px as f64 - geometry.center_x;
            if let Some(hsv) = geometry.hsv_at_offset(dx, dy) {
                surface.set_pixel(px as i64, py as i64, Rgb::from_hsv(hsv));
            }
        }
    }
}

/// Color under the pointer at `(x, y)` in canvas coordinates.
///
/// Returns `None` when the pointer is outside the wheel, in which case the
/// endpoint color must stay unchanged.
pub fn wheel_color_at(geometry: &WheelGeometry, x: f64, y: f64) -> Option<Rgb> {
    geometry
        .hsv_at_offset(x - geometry.center_x, y - geometry.center_y)
        .map(Rgb::from_hsv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hsv_to_rgb;
    use crate::surface::PixelBuffer;

    #[test]
    fn geometry_for_default_canvas() {
        let g = WheelGeometry::new(200.0, 200.0);
        assert_eq!((g.center_x, g.center_y, g.radius), (100.0, 100.0, 95.0));
    }

    #[test]
    fn geometry_uses_shorter_side() {
        let g = WheelGeometry::new(300.0, 120.0);
        assert_eq!(g.radius, 55.0);
        assert_eq!(g.center_x, 150.0);
    }

    #[test]
    fn center_is_white() {
        let g = WheelGeometry::new(200.0, 200.0);
        assert_eq!(wheel_color_at(&g, 100.0, 100.0), Some(Rgb::WHITE));
    }

    #[test]
    fn right_edge_is_cyan() {
        // atan2(0, 95) = 0, so hue = 0.5
        let g = WheelGeometry::new(200.0, 200.0);
        assert_eq!(
            wheel_color_at(&g, 195.0, 100.0),
            Some(hsv_to_rgb(0.5, 1.0, 1.0))
        );
        assert_eq!(wheel_color_at(&g, 195.0, 100.0), Some(Rgb::new(0, 255, 255)));
    }

    #[test]
    fn left_edge_is_red() {
        let g = WheelGeometry::new(200.0, 200.0);
        assert_eq!(wheel_color_at(&g, 5.0, 100.0), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn outside_radius_is_ignored() {
        let g = WheelGeometry::new(200.0, 200.0);
        assert_eq!(wheel_color_at(&g, 196.0, 100.0), None);
        assert_eq!(wheel_color_at(&g, 0.0, 0.0), None);
    }

    #[test]
    fn position_of_inverts_pointer_mapping() {
        let g = WheelGeometry::new(200.0, 200.0);
        let (x, y) = g.position_of(Hsv::new(0.5, 1.0, 1.0));
        assert!((x - 195.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);
        let (x, y) = g.position_of(Hsv::new(0.3, 0.0, 1.0));
        assert_eq!((x, y), (100.0, 100.0));
        let (x, y) = g.position_of(Hsv::new(0.75, 0.5, 1.0));
        let picked = wheel_color_at(&g, x, y).unwrap();
        assert_eq!(picked, hsv_to_rgb(0.75, 0.5, 1.0));
    }

    #[test]
    fn degenerate_canvas_picks_nothing() {
        let g = WheelGeometry::new(8.0, 8.0);
        assert_eq!(wheel_color_at(&g, 4.0, 4.0), None);
    }

    #[test]
    fn raster_matches_pointer_mapping() {
        let mut buf = PixelBuffer::new(200, 200);
        draw_color_wheel(&mut buf);
        let g = WheelGeometry::new(200.0, 200.0);
        for &(x, y) in &[(100, 100), (150, 60), (20, 110), (100, 6)] {
            assert_eq!(
                buf.pixel(x, y),
                wheel_color_at(&g, x as f64, y as f64),
                "pixel ({x}, {y})"
            );
        }
        // corners are outside the wheel
        assert_eq!(buf.pixel(0, 0), None);
        assert_eq!(buf.pixel(199, 199), None);
    }
}
