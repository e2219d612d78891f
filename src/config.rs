use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PadError;
use crate::smooth::SMOOTH_ITERATIONS;

/// Presentation and behaviour settings for one pad.
/// Serializable so hosts can keep presets alongside their forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    // -- Pen --
    /// Constant pen width used by replay and bitmap export.
    pub pen_width: f32,
    /// How the end points of each line are drawn.
    pub pen_cap: PenCap,
    /// Colour of the ink.
    pub pen_colour: Colour,

    // -- Surface --
    /// Fill colour for the background of the surface.
    pub bg_colour: Colour,

    // -- Capture --
    /// How long the pointer may stay outside the surface before the
    /// stroke is finalized, in milliseconds.
    pub leave_delay_ms: u64,
    /// Corner-cutting passes applied when a stroke ends, at most
    /// [`SMOOTH_ITERATIONS`]. 0 = no smoothing.
    pub smooth_iterations: usize,
    /// Ignore pointer input; the pad only shows regenerated signatures.
    pub display_only: bool,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            pen_width: 2.0,
            pen_cap: PenCap::Round,
            pen_colour: Colour::rgb(0x14, 0x53, 0x94),
            bg_colour: Colour::WHITE,
            leave_delay_ms: 500,
            smooth_iterations: SMOOTH_ITERATIONS,
            display_only: false,
        }
    }
}

impl PadConfig {
    /// Load a preset from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, PadError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(PadError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable for rendering.
    pub fn validate(&self) -> Result<(), PadError> {
        if !self.pen_width.is_finite() || self.pen_width <= 0.0 {
            return Err(PadError::InvalidConfig(format!(
                "pen_width must be a positive number, got {}",
                self.pen_width
            )));
        }
        if self.smooth_iterations > SMOOTH_ITERATIONS {
            return Err(PadError::InvalidConfig(format!(
                "smooth_iterations must be at most {}, got {}",
                SMOOTH_ITERATIONS, self.smooth_iterations
            )));
        }
        Ok(())
    }

    pub fn leave_delay(&self) -> Duration {
        Duration::from_millis(self.leave_delay_ms)
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl FromStr for PenCap {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "butt" => Ok(PenCap::Butt),
            "round" => Ok(PenCap::Round),
            "square" => Ok(PenCap::Square),
            other => Err(PadError::InvalidConfig(format!(
                "unknown pen cap '{}' (expected butt, round or square)",
                other
            ))),
        }
    }
}

/// An sRGB colour with alpha, written as `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Colour {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PadError::InvalidColour(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Colour::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Colour::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Colour {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Colour {
    type Error = PadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!("#145394".parse::<Colour>().unwrap(), Colour::rgb(0x14, 0x53, 0x94));
        assert_eq!("#fff".parse::<Colour>().unwrap(), Colour::WHITE);
        assert_eq!("#00000080".parse::<Colour>().unwrap().a, 0x80);
        assert!("145394".parse::<Colour>().is_err());
        assert!("#12345".parse::<Colour>().is_err());
        assert!("#gggggg".parse::<Colour>().is_err());
    }

    #[test]
    fn colour_display_round_trips() {
        let c = Colour::rgb(0x14, 0x53, 0x94);
        assert_eq!(c.to_string(), "#145394");
        assert_eq!(c.to_string().parse::<Colour>().unwrap(), c);
    }

    #[test]
    fn preset_fills_missing_fields_with_defaults() {
        let config: PadConfig =
            serde_json::from_str(r##"{"pen_colour": "#000000", "pen_cap": "square"}"##).unwrap();
        assert_eq!(config.pen_colour, Colour::BLACK);
        assert_eq!(config.pen_cap, PenCap::Square);
        assert_eq!(config.pen_width, 2.0);
        assert_eq!(config.leave_delay(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_non_positive_pen_width() {
        let config = PadConfig {
            pen_width: 0.0,
            ..PadConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(PadConfig::default().validate().is_ok());
    }

    #[test]
    fn bounds_smoothing_passes() {
        let config: PadConfig = serde_json::from_str(r#"{"smooth_iterations": 64}"#).unwrap();
        assert!(matches!(config.validate(), Err(PadError::InvalidConfig(_))));

        for passes in 0..=SMOOTH_ITERATIONS {
            let config = PadConfig {
                smooth_iterations: passes,
                ..PadConfig::default()
            };
            assert!(config.validate().is_ok(), "{} passes rejected", passes);
        }
    }

    #[test]
    fn preset_syntax_error_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        std::fs::write(&path, "{ pen_width: 2").unwrap();
        assert!(matches!(PadConfig::load(&path), Err(PadError::ConfigParse(_))));

        std::fs::write(&path, r#"{"smooth_iterations": 40}"#).unwrap();
        assert!(matches!(PadConfig::load(&path), Err(PadError::InvalidConfig(_))));
    }
}
