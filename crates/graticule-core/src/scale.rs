// File: crates/graticule-core/src/scale.rs
// Summary: Linear data-to-screen scales and the coordinate projector used by the grid renderer.

use crate::types::Range1d;

/// Projects data-space coordinate arrays into device space.
pub trait CoordinateMapping {
    fn map_to_screen(&self, xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>);
}

/// Maps a data interval onto a pixel span. `px_start` corresponds to
/// `range.start`, so a vertical scale passes the bottom pixel first.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub range: Range1d,
    pub px_start: f64,
    pub px_end: f64,
}

impl LinearScale {
    pub fn new(range: Range1d, px_start: f64, px_end: f64) -> Self {
        Self { range, px_start, px_end }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.range.end - self.range.start;
        // collapsed range maps everything to the span start
        if span.abs() < 1e-12 {
            return self.px_start;
        }
        self.px_start + (v - self.range.start) / span * (self.px_end - self.px_start)
    }

    pub fn map_all(&self, vs: &[f64]) -> Vec<f64> {
        vs.iter().map(|&v| self.to_px(v)).collect()
    }
}

/// A pair of scales for one (x range, y range) combination of a frame.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateView {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl CoordinateMapping for CoordinateView {
    fn map_to_screen(&self, xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
        (self.x_scale.map_all(xs), self.y_scale.map_all(ys))
    }
}
