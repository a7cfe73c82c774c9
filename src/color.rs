//! Color value types for the gradient endpoints.
//!
//! `Rgb` stores 8-bit integer channels, which is what keeps repeated
//! HSV ↔ RGB ↔ hex conversion from drifting. `Hsv` is the normalized
//! working form used by the wheel and the brightness slider.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GradientError;
use crate::math;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV color with every component in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from HSV values (all 0.0–1.0).
    pub fn from_hsv(hsv: Hsv) -> Self {
        math::hsv_to_rgb(hsv.h, hsv.s, hsv.v)
    }

    /// Convert to HSV (all 0.0–1.0).
    pub fn to_hsv(&self) -> Hsv {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, GradientError> {
        math::parse_hex(hex)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        math::rgb_to_hex(self.r, self.g, self.b)
    }

    /// Channels as 0.0–1.0 floats.
    pub fn to_f64(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Build from 0.0–1.0 floats, rounding to the nearest channel value.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let ch = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(ch(r), ch(g), ch(b))
    }
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Same hue and saturation with a different value.
    pub fn with_value(self, v: f64) -> Self {
        Self { v, ..self }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(0xef, 0xff, 0x00).to_string(), "#efff00");
    }

    #[test]
    fn with_value_keeps_hue_and_saturation() {
        let hsv = Hsv::new(0.25, 0.6, 1.0).with_value(0.3);
        assert_eq!(hsv, Hsv::new(0.25, 0.6, 0.3));
    }

    #[test]
    fn hsv_round_trip_through_rgb() {
        let rgb = Rgb::new(0xff, 0x64, 0x00);
        assert_eq!(Rgb::from_hsv(rgb.to_hsv()), rgb);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(255, 100, 0)).unwrap();
        assert_eq!(json, "\"#ff6400\"");
        let back: Rgb = serde_json::from_str("\"#FF6400\"").unwrap();
        assert_eq!(back, Rgb::new(255, 100, 0));
        assert!(serde_json::from_str::<Rgb>("\"orange\"").is_err());
    }

    #[test]
    fn from_f64_rounds_and_clamps() {
        assert_eq!(Rgb::from_f64(1.2, 0.5, -0.1), Rgb::new(255, 128, 0));
    }
}
