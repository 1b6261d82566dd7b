// File: crates/graticule-core/src/types.rs
// Summary: Shared types and constants (dimensions, ranges, bounds specs, surface sizes, paddings).

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Name under which a frame stores its primary x/y ranges.
pub const DEFAULT_RANGE_NAME: &str = "default";

/// Which of the two orthogonal axes grid lines are positioned along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimension {
    /// Horizontal data axis; lines are vertical.
    #[default]
    Width,
    /// Vertical data axis; lines are horizontal.
    Height,
}

impl Dimension {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Dimension::Width => 0,
            Dimension::Height => 1,
        }
    }

    #[inline]
    pub const fn cross(self) -> Dimension {
        match self {
            Dimension::Width => Dimension::Height,
            Dimension::Height => Dimension::Width,
        }
    }
}

impl TryFrom<u8> for Dimension {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Dimension::Width),
            1 => Ok(Dimension::Height),
            other => Err(GridError::InvalidDimension(other)),
        }
    }
}

impl From<Dimension> for u8 {
    fn from(d: Dimension) -> u8 {
        d.index() as u8
    }
}

/// Visible data interval along one dimension. `start` may exceed `end` for
/// flipped ranges; `min`/`max` always give the ordered bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

impl Range1d {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn min(&self) -> f64 { self.start.min(self.end) }
    #[inline]
    pub fn max(&self) -> f64 { self.start.max(self.end) }
    #[inline]
    pub fn span(&self) -> f64 { self.max() - self.min() }
}

/// Either `auto` or an explicit, unordered pair of numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoundsRepr", into = "BoundsRepr")]
pub enum BoundsSpec {
    #[default]
    Auto,
    Explicit(f64, f64),
}

impl BoundsSpec {
    pub fn is_auto(&self) -> bool {
        matches!(self, BoundsSpec::Auto)
    }
}

// Wire form: the string "auto" or a two-element array.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum BoundsRepr {
    Pair(f64, f64),
    Keyword(BoundsKeyword),
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BoundsKeyword {
    Auto,
}

impl From<BoundsRepr> for BoundsSpec {
    fn from(r: BoundsRepr) -> Self {
        match r {
            BoundsRepr::Pair(a, b) => BoundsSpec::Explicit(a, b),
            BoundsRepr::Keyword(BoundsKeyword::Auto) => BoundsSpec::Auto,
        }
    }
}

impl From<BoundsSpec> for BoundsRepr {
    fn from(b: BoundsSpec) -> Self {
        match b {
            BoundsSpec::Auto => BoundsRepr::Keyword(BoundsKeyword::Auto),
            BoundsSpec::Explicit(a, b) => BoundsRepr::Pair(a, b),
        }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
