//! Depth bands and their colors.
//!
//! Six ordered bands split at 20, 50, 100, 200 and 500 km. The lowest and
//! highest bands are open-ended, so every real depth (NaN included) maps to
//! exactly one color.

use crate::{
    core::constants::{DEPTH_COLORS, DEPTH_THRESHOLDS_KM},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// RGB color, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or the short `#RGB` form
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        let invalid = || Error::InvalidColor(hex.to_string());
        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

/// How a depth exactly on a threshold is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Depth must exceed a threshold to enter the deeper band (20 km → 0–20 band)
    StrictGreater,
    /// Depth equal to a threshold enters the deeper band (20 km → 20–50 band)
    #[default]
    GreaterOrEqual,
}

impl BoundaryPolicy {
    fn passes(&self, depth_km: f64, threshold: f64) -> bool {
        match self {
            BoundaryPolicy::StrictGreater => depth_km > threshold,
            BoundaryPolicy::GreaterOrEqual => depth_km >= threshold,
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" | "strict_greater" | "gt" => Ok(BoundaryPolicy::StrictGreater),
            "inclusive" | "greater_or_equal" | "ge" => Ok(BoundaryPolicy::GreaterOrEqual),
            other => Err(Error::Config(format!("unknown boundary policy: {}", other))),
        }
    }
}

/// Static depth → color table
#[derive(Debug, Clone, PartialEq)]
pub struct DepthScale {
    thresholds: [f64; 5],
    colors: [Color; 6],
    policy: BoundaryPolicy,
}

impl DepthScale {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self {
            thresholds: DEPTH_THRESHOLDS_KM,
            colors: DEPTH_COLORS,
            policy,
        }
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Band colors from shallowest to deepest
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Band index in `0..6`, 0 being the shallowest
    pub fn band_index(&self, depth_km: f64) -> usize {
        self.thresholds
            .iter()
            .rposition(|&t| self.policy.passes(depth_km, t))
            .map_or(0, |i| i + 1)
    }

    pub fn classify(&self, depth_km: f64) -> Color {
        self.colors[self.band_index(depth_km)]
    }
}

impl Default for DepthScale {
    fn default() -> Self {
        Self::new(BoundaryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::from_hex("#fd8d3c").unwrap();
        assert_eq!(color, Color::rgb(0xFD, 0x8D, 0x3C));
        assert_eq!(color.to_hex(), "#FD8D3C");
        assert_eq!(Color::from_hex("#000").unwrap(), Color::BLACK);
        assert!(Color::from_hex("FD8D3C").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(128, 0, 38)).unwrap();
        assert_eq!(json, "\"#800026\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(128, 0, 38));
    }

    #[test]
    fn test_band_index_inclusive() {
        let scale = DepthScale::new(BoundaryPolicy::GreaterOrEqual);
        assert_eq!(scale.band_index(-5.0), 0);
        assert_eq!(scale.band_index(19.9), 0);
        assert_eq!(scale.band_index(20.0), 1);
        assert_eq!(scale.band_index(50.0), 2);
        assert_eq!(scale.band_index(100.0), 3);
        assert_eq!(scale.band_index(200.0), 4);
        assert_eq!(scale.band_index(500.0), 5);
        assert_eq!(scale.band_index(10_000.0), 5);
    }

    #[test]
    fn test_band_index_strict() {
        let scale = DepthScale::new(BoundaryPolicy::StrictGreater);
        assert_eq!(scale.band_index(20.0), 0);
        assert_eq!(scale.band_index(20.5), 1);
        assert_eq!(scale.band_index(50.0), 1);
        assert_eq!(scale.band_index(100.0), 2);
        assert_eq!(scale.band_index(200.0), 3);
        assert_eq!(scale.band_index(500.0), 4);
        assert_eq!(scale.band_index(500.1), 5);
    }

    #[test]
    fn test_band_colors_match_their_hex_codes() {
        let hex: Vec<_> = DepthScale::default().colors().iter().map(Color::to_hex).collect();
        assert_eq!(
            hex,
            vec!["#FEB24C", "#FD8D3C", "#FC4E2A", "#E31A1C", "#BD0026", "#800026"]
        );
    }

    #[test]
    fn test_nan_falls_into_lowest_band() {
        let scale = DepthScale::default();
        assert_eq!(scale.classify(f64::NAN), scale.colors()[0]);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "strict".parse::<BoundaryPolicy>().unwrap(),
            BoundaryPolicy::StrictGreater
        );
        assert_eq!(
            "Inclusive".parse::<BoundaryPolicy>().unwrap(),
            BoundaryPolicy::GreaterOrEqual
        );
        assert!("sideways".parse::<BoundaryPolicy>().is_err());
    }
}
