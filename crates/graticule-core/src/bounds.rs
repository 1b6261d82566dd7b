// File: crates/graticule-core/src/bounds.rs
// Summary: Bounds resolution along a grid's primary dimension (user overrides, data range, axis fallback).

use crate::types::{BoundsSpec, Dimension, Range1d};

/// What a rendered axis exposes to sibling guides: where it sits and the
/// interval it decided to cover.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisView {
    pub dimension: Dimension,
    pub x_range_name: String,
    pub y_range_name: String,
    pub computed_bounds: (f64, f64),
}

/// Identifies which axis views a guide may borrow bounds from.
#[derive(Clone, Copy, Debug)]
pub struct BoundsKey<'a> {
    pub dimension: Dimension,
    pub x_range_name: &'a str,
    pub y_range_name: &'a str,
}

impl BoundsKey<'_> {
    fn matches(&self, axis: &AxisView) -> bool {
        axis.dimension == self.dimension
            && axis.x_range_name == self.x_range_name
            && axis.y_range_name == self.y_range_name
    }
}

/// Order an explicit pair and clamp it into `range`.
///
/// Only `start` below `range.min` and `end` above `range.max` are clamped. A
/// `start` past `range.max` or an `end` before `range.min` passes through as is.
pub fn clamp_explicit(range: &Range1d, a: f64, b: f64) -> (f64, f64) {
    let mut start = a.min(b);
    let mut end = a.max(b);
    if start < range.min() {
        start = range.min();
    }
    if end > range.max() {
        end = range.max();
    }
    (start, end)
}

/// Effective `(start, end)` interval for a guide, always ordered.
///
/// With `auto` bounds the data range is used unless an axis view matches
/// `key`; the last matching axis wins. NaN inputs are not rejected.
pub fn resolve_bounds(range: &Range1d, spec: BoundsSpec, key: BoundsKey<'_>, axes: &[AxisView]) -> (f64, f64) {
    let (start, end) = match spec {
        BoundsSpec::Explicit(a, b) => clamp_explicit(range, a, b),
        BoundsSpec::Auto => axes
            .iter()
            .rev()
            .find(|axis| key.matches(axis))
            .map(|axis| axis.computed_bounds)
            .unwrap_or((range.min(), range.max())),
    };
    (start.min(end), start.max(end))
}
