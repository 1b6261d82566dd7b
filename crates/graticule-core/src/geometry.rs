// File: crates/graticule-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rectangle, pixel snapping).

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self::from_ltrb(left, top, right, bottom)
    }
}

/// Snap a device coordinate to the nearest whole pixel (half away from zero,
/// matching `f64::round`).
#[inline]
pub fn snap(v: f64) -> f64 {
    v.round()
}
