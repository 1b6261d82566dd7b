// File: crates/graticule-core/src/frame.rs
// Summary: Cartesian plot frame: named x/y ranges plus the plot rectangle they project into.

use std::collections::BTreeMap;

use crate::error::{GridError, Result};
use crate::geometry::RectI32;
use crate::scale::{CoordinateView, LinearScale};
use crate::types::{Range1d, DEFAULT_RANGE_NAME};

#[derive(Clone, Debug)]
pub struct CartesianFrame {
    pub plot: RectI32,
    x_ranges: BTreeMap<String, Range1d>,
    y_ranges: BTreeMap<String, Range1d>,
}

impl CartesianFrame {
    pub fn new(plot: RectI32, x_range: Range1d, y_range: Range1d) -> Self {
        let mut x_ranges = BTreeMap::new();
        let mut y_ranges = BTreeMap::new();
        x_ranges.insert(DEFAULT_RANGE_NAME.to_string(), x_range);
        y_ranges.insert(DEFAULT_RANGE_NAME.to_string(), y_range);
        Self { plot, x_ranges, y_ranges }
    }

    pub fn with_extra_x_range(mut self, name: impl Into<String>, range: Range1d) -> Self {
        self.x_ranges.insert(name.into(), range);
        self
    }

    pub fn with_extra_y_range(mut self, name: impl Into<String>, range: Range1d) -> Self {
        self.y_ranges.insert(name.into(), range);
        self
    }

    /// Replace (or add) a named x range, e.g. after a pan or zoom.
    pub fn set_x_range(&mut self, name: &str, range: Range1d) {
        self.x_ranges.insert(name.to_string(), range);
    }

    pub fn set_y_range(&mut self, name: &str, range: Range1d) {
        self.y_ranges.insert(name.to_string(), range);
    }

    pub fn x_range(&self, name: &str) -> Result<Range1d> {
        self.x_ranges
            .get(name)
            .copied()
            .ok_or_else(|| GridError::UnknownRange { axis: "x", name: name.to_string() })
    }

    pub fn y_range(&self, name: &str) -> Result<Range1d> {
        self.y_ranges
            .get(name)
            .copied()
            .ok_or_else(|| GridError::UnknownRange { axis: "y", name: name.to_string() })
    }

    /// Scales for the named range pair. Y grows upward, so its scale starts at the bottom pixel.
    pub fn coordinates(&self, x_name: &str, y_name: &str) -> Result<CoordinateView> {
        let x = self.x_range(x_name)?;
        let y = self.y_range(y_name)?;
        Ok(CoordinateView {
            x_scale: LinearScale::new(x, self.plot.left as f64, self.plot.right as f64),
            y_scale: LinearScale::new(y, self.plot.bottom as f64, self.plot.top as f64),
        })
    }
}
