//! Sizing, color, and styling constants for the generator.

use crate::color::Rgb;

/// Gap between the wheel edge and the canvas edge
pub const WHEEL_MARGIN: f64 = 5.0;

/// Default color wheel canvas side
pub const WHEEL_SIZE: u32 = 200;

/// Default brightness slider canvas size
pub const SLIDER_WIDTH: u32 = 200;
pub const SLIDER_HEIGHT: u32 = 30;

/// Cursor circle radius on the wheel
pub const CURSOR_RADIUS: f64 = 6.0;

/// Thumb radius on the brightness slider
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for slider tracks and preview
pub const RADIUS: f32 = 8.0;

/// Gap between editor elements
pub const GAP: f32 = 8.0;

/// Padding around the whole editor
pub const PADDING: f32 = 16.0;

/// Preview height
pub const PREVIEW_HEIGHT: f32 = 240.0;

/// Angle slider track size
pub const ANGLE_SLIDER_WIDTH: f32 = 240.0;
pub const ANGLE_SLIDER_HEIGHT: f32 = 16.0;

/// Label font size
pub const LABEL_FONT: f32 = 12.0;

/// CSS output font size
pub const CODE_FONT: f32 = 11.0;

pub const DEFAULT_START: Rgb = Rgb::new(0xef, 0xff, 0x00);
pub const DEFAULT_END: Rgb = Rgb::new(0xff, 0x64, 0x00);
pub const DEFAULT_ANGLE: u16 = 180;
pub const MAX_ANGLE: u16 = 360;

/// Checker tile side in pixels (four quadrants of half this size)
pub const CHECKER_TILE: u32 = 40;
pub const CHECKER_LIGHT: Rgb = Rgb::new(0xe1, 0xe1, 0xe1);
pub const CHECKER_DARK: Rgb = Rgb::new(0xbd, 0xbd, 0xbd);
