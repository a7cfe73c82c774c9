//! Startup configuration for the generator.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants;
use crate::error::GradientError;
use crate::gradient::{BlendMode, GradientStyle};

/// Initial colors, gradient settings, and canvas sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub start: Rgb,
    pub end: Rgb,
    /// Degrees; clamped to 0–360 when applied
    pub angle: i32,
    pub blend_mode: BlendMode,
    pub style: GradientStyle,
    pub wheel_size: u32,
    pub slider_width: u32,
    pub slider_height: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: constants::DEFAULT_START,
            end: constants::DEFAULT_END,
            angle: constants::DEFAULT_ANGLE as i32,
            blend_mode: BlendMode::default(),
            style: GradientStyle::default(),
            wheel_size: constants::WHEEL_SIZE,
            slider_width: constants::SLIDER_WIDTH,
            slider_height: constants::SLIDER_HEIGHT,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, GradientError> {
        let config: Self = serde_json::from_str(json)?;
        if !(0..=constants::MAX_ANGLE as i32).contains(&config.angle) {
            log::warn!("config angle {} out of range, clamping", config.angle);
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GradientError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(GeneratorConfig::from_json("{}").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn partial_override() {
        let config =
            GeneratorConfig::from_json(r##"{"start": "#112233", "blend_mode": "hard-light", "style": "linear"}"##)
                .unwrap();
        assert_eq!(config.start, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(config.end, constants::DEFAULT_END);
        assert_eq!(config.blend_mode, BlendMode::HardLight);
        assert_eq!(config.style, GradientStyle::Linear);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            GeneratorConfig::from_json(r#"{"blend_mode": "multiply"}"#),
            Err(GradientError::Config(_))
        ));
        assert!(GeneratorConfig::from_json(r##"{"end": "#12345"}"##).is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = GeneratorConfig {
            angle: 45,
            ..GeneratorConfig::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"#efff00\""));
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }
}
