// File: crates/graticule-core/src/axis.rs
// Summary: Axis model with labels, range names, bounds and an optional ticker shared with grids.

use serde::{Deserialize, Serialize};

use crate::bounds::{clamp_explicit, AxisView};
use crate::error::Result;
use crate::frame::CartesianFrame;
use crate::ticker::TickerKind;
use crate::types::{BoundsSpec, Dimension, Range1d, DEFAULT_RANGE_NAME};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    pub label: String,
    pub dimension: Dimension,
    pub x_range_name: String,
    pub y_range_name: String,
    pub bounds: BoundsSpec,
    pub ticker: Option<TickerKind>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            label: String::new(),
            dimension: Dimension::Width,
            x_range_name: DEFAULT_RANGE_NAME.to_string(),
            y_range_name: DEFAULT_RANGE_NAME.to_string(),
            bounds: BoundsSpec::Auto,
            ticker: Some(TickerKind::default()),
        }
    }
}

impl Axis {
    pub fn new(label: impl Into<String>, dimension: Dimension) -> Self {
        Self { label: label.into(), dimension, ..Self::default() }
    }

    pub fn default_x() -> Self {
        Self::new("x", Dimension::Width)
    }

    pub fn default_y() -> Self {
        Self::new("y", Dimension::Height)
    }

    pub fn with_bounds(mut self, bounds: BoundsSpec) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_ticker(mut self, ticker: Option<TickerKind>) -> Self {
        self.ticker = ticker;
        self
    }

    /// Interval this axis covers along its own dimension of `range`.
    pub fn computed_bounds(&self, range: &Range1d) -> (f64, f64) {
        match self.bounds {
            BoundsSpec::Auto => (range.min(), range.max()),
            BoundsSpec::Explicit(a, b) => clamp_explicit(range, a, b),
        }
    }

    /// Snapshot of this axis against the frame's current ranges.
    pub fn view(&self, frame: &CartesianFrame) -> Result<AxisView> {
        let range = match self.dimension {
            Dimension::Width => frame.x_range(&self.x_range_name)?,
            Dimension::Height => frame.y_range(&self.y_range_name)?,
        };
        Ok(AxisView {
            dimension: self.dimension,
            x_range_name: self.x_range_name.clone(),
            y_range_name: self.y_range_name.clone(),
            computed_bounds: self.computed_bounds(&range),
        })
    }
}
