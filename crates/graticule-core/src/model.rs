// File: crates/graticule-core/src/model.rs
// Summary: Grid guide configuration and the per-pass geometry it derives (bounds, ticks, segments, bands).

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::bounds::{resolve_bounds, AxisView, BoundsKey};
use crate::error::Result;
use crate::frame::CartesianFrame;
use crate::grid::{build_segments, coordinate_ticks, partition_bands, Band, GridCoords};
use crate::style::{Color, FillStyle, HatchStyle, LineStyle};
use crate::ticker::{TickLocation, Ticker, TickerKind};
use crate::types::{BoundsSpec, Dimension, Range1d, DEFAULT_RANGE_NAME};

/// Everything a grid reads from the plot during one render pass.
#[derive(Clone, Copy)]
pub struct PlotContext<'a> {
    pub frame: &'a CartesianFrame,
    pub axes: &'a [AxisView],
}

impl<'a> PlotContext<'a> {
    pub fn new(frame: &'a CartesianFrame, axes: &'a [AxisView]) -> Self {
        Self { frame, axes }
    }
}

/// Reference grid drawn behind a plot along one dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub dimension: Dimension,
    pub bounds: BoundsSpec,
    pub cross_bounds: BoundsSpec,
    pub x_range_name: String,
    pub y_range_name: String,
    /// Axis whose ticker is used when `ticker` is unset.
    pub axis: Option<Axis>,
    pub ticker: Option<TickerKind>,
    pub grid_line: LineStyle,
    pub minor_grid_line: LineStyle,
    pub band_fill: FillStyle,
    pub band_hatch: HatchStyle,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            dimension: Dimension::Width,
            bounds: BoundsSpec::Auto,
            cross_bounds: BoundsSpec::Auto,
            x_range_name: DEFAULT_RANGE_NAME.to_string(),
            y_range_name: DEFAULT_RANGE_NAME.to_string(),
            axis: None,
            ticker: None,
            grid_line: LineStyle::solid(Color::rgb(0xe5, 0xe5, 0xe5), 1.0),
            minor_grid_line: LineStyle::none(),
            band_fill: FillStyle::none(),
            band_hatch: HatchStyle::default(),
        }
    }
}

impl Grid {
    pub fn new(dimension: Dimension) -> Self {
        Self { dimension, ..Self::default() }
    }

    pub fn with_ticker(mut self, ticker: TickerKind) -> Self {
        self.ticker = Some(ticker);
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsSpec) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_cross_bounds(mut self, cross_bounds: BoundsSpec) -> Self {
        self.cross_bounds = cross_bounds;
        self
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The grid's own ticker, else its axis's ticker.
    pub fn get_ticker(&self) -> Option<&TickerKind> {
        self.ticker
            .as_ref()
            .or_else(|| self.axis.as_ref().and_then(|a| a.ticker.as_ref()))
    }

    /// `(range, cross_range)` for this grid's dimension.
    pub fn ranges(&self, frame: &CartesianFrame) -> Result<(Range1d, Range1d)> {
        let x = frame.x_range(&self.x_range_name)?;
        let y = frame.y_range(&self.y_range_name)?;
        Ok(match self.dimension {
            Dimension::Width => (x, y),
            Dimension::Height => (y, x),
        })
    }

    pub fn computed_bounds(&self, ctx: &PlotContext<'_>) -> Result<(f64, f64)> {
        let (range, _) = self.ranges(ctx.frame)?;
        let key = BoundsKey {
            dimension: self.dimension,
            x_range_name: &self.x_range_name,
            y_range_name: &self.y_range_name,
        };
        Ok(resolve_bounds(&range, self.bounds, key, ctx.axes))
    }

    /// Cross-dimension extent of every segment. An explicit pair is used verbatim.
    pub fn cross_extent(&self, cross_range: &Range1d) -> (f64, f64) {
        match self.cross_bounds {
            BoundsSpec::Auto => (cross_range.min(), cross_range.max()),
            BoundsSpec::Explicit(a, b) => (a, b),
        }
    }

    /// Tick positions for `location` after the end-inclusion policy.
    /// Empty when no ticker can be resolved.
    pub fn grid_ticks(&self, ctx: &PlotContext<'_>, location: TickLocation, exclude_ends: bool) -> Result<Vec<f64>> {
        let Some(ticker) = self.get_ticker() else {
            tracing::debug!(dimension = self.dimension.index(), "grid has no ticker; nothing to draw");
            return Ok(Vec::new());
        };
        let (range, cross_range) = self.ranges(ctx.frame)?;
        let (start, end) = self.computed_bounds(ctx)?;

        // Straight grids only need one cross location, so the cross minimum stands in for all of them.
        let ticks = ticker.get_ticks(start, end, &range, cross_range.min()).take(location);
        Ok(coordinate_ticks(ticks, range.min(), range.max(), exclude_ends))
    }

    pub fn grid_coords(&self, ctx: &PlotContext<'_>, location: TickLocation, exclude_ends: bool) -> Result<GridCoords> {
        let ticks = self.grid_ticks(ctx, location, exclude_ends)?;
        if ticks.is_empty() {
            return Ok(GridCoords::new());
        }
        let (_, cross_range) = self.ranges(ctx.frame)?;
        let (cmin, cmax) = self.cross_extent(&cross_range);
        Ok(build_segments(&ticks, self.dimension, cmin, cmax))
    }

    /// Alternating bands over the closed major tick set.
    pub fn band_regions(&self, ctx: &PlotContext<'_>) -> Result<Vec<Band>> {
        let ticks = self.grid_ticks(ctx, TickLocation::Major, false)?;
        let (_, cross_range) = self.ranges(ctx.frame)?;
        let (cmin, cmax) = self.cross_extent(&cross_range);
        Ok(partition_bands(&ticks, self.dimension, cmin, cmax))
    }
}
