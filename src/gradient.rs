//! Gradient descriptor and CSS output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants;
use crate::error::GradientError;

/// CSS `background-blend-mode` values offered by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Screen,
    Overlay,
    HardLight,
    ColorBurn,
}

impl BlendMode {
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::HardLight,
        BlendMode::ColorBurn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::HardLight => "hard-light",
            BlendMode::ColorBurn => "color-burn",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlendMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| GradientError::UnknownBlendMode {
                name: s.to_string(),
            })
    }
}

/// Whether the output layers the checkerboard over the linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientStyle {
    Linear,
    #[default]
    Checkered,
}

/// Angle and blend mode of the generated gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientDescriptor {
    angle: u16,
    pub blend_mode: BlendMode,
    pub style: GradientStyle,
}

impl Default for GradientDescriptor {
    fn default() -> Self {
        Self {
            angle: constants::DEFAULT_ANGLE,
            blend_mode: BlendMode::default(),
            style: GradientStyle::default(),
        }
    }
}

impl GradientDescriptor {
    pub fn new(angle: i32, blend_mode: BlendMode, style: GradientStyle) -> Self {
        let mut desc = Self {
            angle: 0,
            blend_mode,
            style,
        };
        desc.set_angle(angle);
        desc
    }

    /// Angle in degrees, 0–360.
    pub fn angle(&self) -> u16 {
        self.angle
    }

    /// Set the angle, clamped to 0–360. No wrapping.
    pub fn set_angle(&mut self, degrees: i32) {
        self.angle = degrees.clamp(0, constants::MAX_ANGLE as i32) as u16;
    }
}

/// Angle picked at `x` on a slider `width` pixels wide: the left edge is 0°,
/// the right edge 360°.
pub fn angle_at(x: f64, width: f64) -> i32 {
    if width <= 0.0 {
        return 0;
    }
    let max = constants::MAX_ANGLE as f64;
    (x / width * max).round().clamp(0.0, max) as i32
}

/// Horizontal position of `angle` on a slider `width` pixels wide.
pub fn angle_position(angle: u16, width: f64) -> f64 {
    angle as f64 / constants::MAX_ANGLE as f64 * width
}

/// The fixed checker layer: a 40px conic tile of two grays.
fn checker_layer() -> String {
    let (light, dark) = (constants::CHECKER_LIGHT.to_hex(), constants::CHECKER_DARK.to_hex());
    format!(
        "conic-gradient({light} 0.25turn, {dark} 0.25turn 0.5turn, {light} 0.5turn 0.75turn, {dark} 0.75turn) top left / {tile}px {tile}px repeat",
        tile = constants::CHECKER_TILE,
    )
}

/// The `<gradient-spec>` value of the `background` property.
pub fn css_background(start: Rgb, end: Rgb, desc: &GradientDescriptor) -> String {
    let linear = format!(
        "linear-gradient({}deg, {}, {})",
        desc.angle(),
        start.to_hex(),
        end.to_hex()
    );
    match desc.style {
        GradientStyle::Linear => linear,
        GradientStyle::Checkered => format!("{}, {}", checker_layer(), linear),
    }
}

/// Full declaration: `background: <spec>; background-blend-mode: <mode>;`.
pub fn css_declaration(start: Rgb, end: Rgb, desc: &GradientDescriptor) -> String {
    format!(
        "background: {}; background-blend-mode: {};",
        css_background(start, end, desc),
        desc.blend_mode
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_mode_names() {
        let names: Vec<_> = BlendMode::ALL.iter().map(BlendMode::as_str).collect();
        assert_eq!(names, ["screen", "overlay", "hard-light", "color-burn"]);
        assert_eq!("hard-light".parse::<BlendMode>().unwrap(), BlendMode::HardLight);
        assert!(matches!(
            "multiply".parse::<BlendMode>(),
            Err(GradientError::UnknownBlendMode { .. })
        ));
    }

    #[test]
    fn blend_mode_serde_matches_css() {
        let json = serde_json::to_string(&BlendMode::ColorBurn).unwrap();
        assert_eq!(json, "\"color-burn\"");
    }

    #[test]
    fn angle_is_clamped() {
        let mut desc = GradientDescriptor::default();
        assert_eq!(desc.angle(), 180);
        desc.set_angle(-20);
        assert_eq!(desc.angle(), 0);
        desc.set_angle(400);
        assert_eq!(desc.angle(), 360);
        desc.set_angle(45);
        assert_eq!(desc.angle(), 45);
    }

    #[test]
    fn slider_maps_edges_to_full_range() {
        assert_eq!(angle_at(0.0, 240.0), 0);
        assert_eq!(angle_at(120.0, 240.0), 180);
        assert_eq!(angle_at(240.0, 240.0), 360);
        assert_eq!(angle_at(-15.0, 240.0), 0);
        assert_eq!(angle_at(300.0, 240.0), 360);
        assert_eq!(angle_at(50.0, 0.0), 0);
    }

    #[test]
    fn slider_position_inverts_angle_at() {
        for angle in [0u16, 45, 180, 359, 360] {
            let x = angle_position(angle, 240.0);
            assert_eq!(angle_at(x, 240.0), angle as i32);
        }
    }

    #[test]
    fn linear_declaration() {
        let desc = GradientDescriptor::new(90, BlendMode::Overlay, GradientStyle::Linear);
        assert_eq!(
            css_declaration(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), &desc),
            "background: linear-gradient(90deg, #ff0000, #0000ff); background-blend-mode: overlay;"
        );
    }

    #[test]
    fn checkered_declaration() {
        let desc = GradientDescriptor::default();
        let css = css_declaration(Rgb::new(0xef, 0xff, 0x00), Rgb::new(0xff, 0x64, 0x00), &desc);
        assert_eq!(
            css,
            "background: conic-gradient(#e1e1e1 0.25turn, #bdbdbd 0.25turn 0.5turn, \
             #e1e1e1 0.5turn 0.75turn, #bdbdbd 0.75turn) top left / 40px 40px repeat, \
             linear-gradient(180deg, #efff00, #ff6400); background-blend-mode: screen;"
        );
    }
}
