// File: crates/graticule-core/src/style.rs
// Summary: Backend-neutral visual styles for grid lines, band fills and band hatching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// 8-bit RGBA color; serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GridError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

/// Stroke style. A line with no color, zero alpha or zero width draws nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: Option<Color>,
    pub alpha: f32,
    pub width: f32,
    pub dash: Vec<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: Some(Color::rgb(0, 0, 0)), alpha: 1.0, width: 1.0, dash: Vec::new() }
    }
}

impl LineStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color: Some(color), alpha: 1.0, width, dash: Vec::new() }
    }

    pub fn none() -> Self {
        Self { color: None, ..Self::default() }
    }

    pub fn is_visible(&self) -> bool {
        self.color.is_some() && self.alpha > 0.0 && self.width > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    pub color: Option<Color>,
    pub alpha: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self { color: Some(Color::rgb(128, 128, 128)), alpha: 1.0 }
    }
}

impl FillStyle {
    pub fn solid(color: Color, alpha: f32) -> Self {
        Self { color: Some(color), alpha }
    }

    pub fn none() -> Self {
        Self { color: None, alpha: 0.0 }
    }

    pub fn is_visible(&self) -> bool {
        self.color.is_some() && self.alpha > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HatchPattern {
    Horizontal,
    Vertical,
    Cross,
    DiagonalUp,
    DiagonalDown,
    DiagonalCross,
}

/// Hatch overlay. `scale` is the pattern spacing and `weight` the stroke
/// width, both in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchStyle {
    pub pattern: Option<HatchPattern>,
    pub color: Color,
    pub alpha: f32,
    pub scale: f32,
    pub weight: f32,
}

impl Default for HatchStyle {
    fn default() -> Self {
        Self { pattern: None, color: Color::rgb(0, 0, 0), alpha: 1.0, scale: 12.0, weight: 1.0 }
    }
}

impl HatchStyle {
    pub fn with_pattern(pattern: HatchPattern, color: Color) -> Self {
        Self { pattern: Some(pattern), color, ..Self::default() }
    }

    pub fn is_visible(&self) -> bool {
        self.pattern.is_some() && self.alpha > 0.0 && self.scale > 0.0 && self.weight > 0.0
    }
}
