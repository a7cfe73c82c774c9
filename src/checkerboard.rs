//! Checkerboard layer of the composite preview.
//!
//! Mirrors the CSS conic tile: each 40px tile is split into four quadrants,
//! dark at top-left and bottom-right, light at top-right and bottom-left.

use crate::color::Rgb;
use crate::constants;

/// Checker color at pixel `(x, y)`.
pub fn checker_color_at(x: u32, y: u32) -> Rgb {
    let cell = constants::CHECKER_TILE / 2;
    if ((x / cell) + (y / cell)) % 2 == 0 {
        constants::CHECKER_DARK
    } else {
        constants::CHECKER_LIGHT
    }
}
