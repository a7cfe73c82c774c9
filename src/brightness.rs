//! Brightness slider rasterization and pointer mapping.
//!
//! The slider runs from black (value 0) on the left to the endpoint's hue and
//! saturation at full value on the right.

use crate::color::Rgb;
use crate::surface::Surface;

/// The right-hand end of the slider for `current`: same hue and saturation, value 1.
pub fn slider_base_color(current: Rgb) -> Rgb {
    Rgb::from_hsv(current.to_hsv().with_value(1.0))
}

/// Paint the black → `base` gradient across the whole surface.
pub fn draw_brightness_slider<S: Surface + ?Sized>(surface: &mut S, base: Rgb) {
    let (w, h) = (surface.width(), surface.height());
    surface.clear();
    surface.fill_horizontal_gradient(0, 0, w, h, Rgb::BLACK, base);
}

/// Value selected by a pointer at `x` on a slider `width` pixels wide.
pub fn brightness_at(x: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (x / width).clamp(0.0, 1.0)
}

/// New color when the slider is touched at `x`: hue and saturation come from
/// `current`, only value changes.
pub fn brightness_color_at(current: Rgb, x: f64, width: f64) -> Rgb {
    let hsv = current.to_hsv();
    Rgb::from_hsv(hsv.with_value(brightness_at(x, width)))
}
