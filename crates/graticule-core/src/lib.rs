// File: crates/graticule-core/src/lib.rs
// Summary: Core library entry point; exports the grid engine, configuration model and render orchestration.

pub mod axis;
pub mod bounds;
pub mod error;
pub mod filter;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod paint;
pub mod render;
pub mod scale;
pub mod style;
pub mod theme;
pub mod ticker;
pub mod types;

pub use axis::Axis;
pub use bounds::{resolve_bounds, AxisView, BoundsKey};
pub use error::{GridError, Result};
pub use filter::{Column, ColumnDataSource, GroupFilter, Indices};
pub use frame::CartesianFrame;
pub use geometry::RectI32;
pub use grid::{build_segments, coordinate_ticks, partition_bands, Band, GridCoords};
pub use model::{Grid, PlotContext};
pub use paint::Painter;
pub use render::GridView;
pub use scale::{CoordinateMapping, CoordinateView, LinearScale};
pub use style::{Color, FillStyle, HatchPattern, HatchStyle, LineStyle};
pub use theme::Theme;
pub use ticker::{BasicTicker, FixedTicker, SingleIntervalTicker, TickLocation, TickSet, Ticker, TickerKind};
pub use types::{BoundsSpec, Dimension, Insets, Range1d};
