//! Color math: direct HSV/RGB/hex conversions without external dependencies.
//! Hue, saturation and value are normalized f64 in 0.0–1.0; RGB channels are
//! 8-bit integers.

use crate::color::{Hsv, Rgb};
use crate::error::GradientError;

/// Six-sector HSV decomposition, channels in 0.0–1.0.
fn hsv_channels(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSV → RGB. `h`, `s`, `v` are 0.0–1.0; channels are rounded to the nearest integer.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let (r, g, b) = hsv_channels(h, s, v);
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// RGB → `#rrggbb`, two lowercase digits per channel.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// RGB → HSV. All outputs 0.0–1.0; hue is 0 for achromatic colors.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let degrees = (sector * 60.0 + 360.0) % 360.0;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: degrees / 360.0,
        s,
        v: max,
    }
}

/// Parse `#RRGGBB` (the `#` is optional) into RGB.
pub fn parse_hex(hex: &str) -> Result<Rgb, GradientError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GradientError::InvalidHex {
            input: hex.to_string(),
        });
    }
    let packed = u32::from_str_radix(digits, 16).map_err(|_| GradientError::InvalidHex {
        input: hex.to_string(),
    })?;
    Ok(Rgb::new(
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    ))
}

/// `#RRGGBB` → HSV, all components 0.0–1.0.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv, GradientError> {
    let rgb = parse_hex(hex)?;
    Ok(rgb_to_hsv(rgb.r, rgb.g, rgb.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1.0 / 255.0;

    #[test]
    fn primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), Rgb::new(0, 255, 255));
    }

    #[test]
    fn hue_one_wraps_to_red() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn grays_ignore_hue() {
        assert_eq!(hsv_to_rgb(0.37, 0.0, 1.0), Rgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(0.81, 0.0, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(hsv_to_rgb(0.2, 0.0, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 10, 171), "#010aab");
    }

    #[test]
    fn hex_is_always_canonical() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(51) {
                let hex = rgb_to_hex(r as u8, g as u8, 7);
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
                assert!(hex[1..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            }
        }
    }

    #[test]
    fn white_is_achromatic() {
        let hsv = hex_to_hsv("#ffffff").unwrap();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn black_has_zero_saturation() {
        let hsv = hex_to_hsv("#000000").unwrap();
        assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 0.0, 0.0));
    }

    #[test]
    fn red_dominant_negative_sector_wraps() {
        // magenta-ish red: max is red, g < b
        let hsv = hex_to_hsv("#ff0080").unwrap();
        assert!(hsv.h > 0.9 && hsv.h < 1.0, "hue {}", hsv.h);
    }

    #[test]
    fn round_trip_red() {
        let rgb = hsv_to_rgb(0.0, 1.0, 1.0);
        let hsv = hex_to_hsv(&rgb_to_hex(rgb.r, rgb.g, rgb.b)).unwrap();
        assert!(hsv.h.abs() < EPS);
        assert!((hsv.s - 1.0).abs() < EPS);
        assert!((hsv.v - 1.0).abs() < EPS);
    }

    #[test]
    fn round_trip_within_quantization() {
        for &(h, s, v) in &[(0.1, 0.8, 0.9), (0.45, 0.5, 0.7), (0.77, 1.0, 0.6)] {
            let rgb = hsv_to_rgb(h, s, v);
            let back = hex_to_hsv(&rgb_to_hex(rgb.r, rgb.g, rgb.b)).unwrap();
            assert!((back.h - h).abs() < 0.01, "h {} vs {}", back.h, h);
            assert!((back.s - s).abs() < 0.01, "s {} vs {}", back.s, s);
            assert!((back.v - v).abs() < EPS, "v {} vs {}", back.v, v);
        }
    }

    #[test]
    fn parse_extracts_channels() {
        assert_eq!(parse_hex("#efff00").unwrap(), Rgb::new(0xef, 0xff, 0x00));
        assert_eq!(parse_hex("ff6400").unwrap(), Rgb::new(0xff, 0x64, 0x00));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            parse_hex("#fff"),
            Err(GradientError::InvalidHex { .. })
        ));
        assert!(parse_hex("#gg0000").is_err());
        assert!(parse_hex("").is_err());
    }
}
