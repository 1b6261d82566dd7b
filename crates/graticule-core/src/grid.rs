// File: crates/graticule-core/src/grid.rs
// Summary: Grid line layout: end-inclusion policy for ticks, cross-spanning segments and alternating bands.

use std::ops::Index;

use crate::types::Dimension;

/// Apply the end-inclusion policy to ticks from a generator.
///
/// With `exclude_ends` any tick exactly at `min` or `max` is dropped so no
/// line lands on the plot border. Without it the set is closed: `min` is
/// prepended and `max` appended unless already first/last.
pub fn coordinate_ticks(mut ticks: Vec<f64>, min: f64, max: f64, exclude_ends: bool) -> Vec<f64> {
    if exclude_ends {
        ticks.retain(|&t| t != min && t != max);
    } else {
        if ticks.first() != Some(&min) {
            ticks.insert(0, min);
        }
        if ticks.last() != Some(&max) {
            ticks.push(max);
        }
    }
    ticks
}

/// Two-point line segments in data space, stored per dimension.
///
/// Segment `i` is `(self[Width][i], self[Height][i])`; both arrays always
/// have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridCoords {
    coords: [Vec<[f64; 2]>; 2],
}

impl GridCoords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.coords[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords[0].is_empty()
    }

    pub fn xs(&self) -> &[[f64; 2]] {
        &self.coords[0]
    }

    pub fn ys(&self) -> &[[f64; 2]] {
        &self.coords[1]
    }

    /// Iterate `(xs, ys)` pairs, one per segment.
    pub fn segments(&self) -> impl Iterator<Item = (&[f64; 2], &[f64; 2])> + '_ {
        self.coords[0].iter().zip(self.coords[1].iter())
    }

    fn push(&mut self, dimension: Dimension, primary: [f64; 2], cross: [f64; 2]) {
        self.coords[dimension.index()].push(primary);
        self.coords[dimension.cross().index()].push(cross);
    }
}

impl Index<Dimension> for GridCoords {
    type Output = [[f64; 2]];

    fn index(&self, d: Dimension) -> &Self::Output {
        &self.coords[d.index()]
    }
}

/// One straight segment per tick, spanning `cross_min..cross_max` in the
/// cross dimension.
pub fn build_segments(ticks: &[f64], dimension: Dimension, cross_min: f64, cross_max: f64) -> GridCoords {
    let mut out = GridCoords::new();
    for &t in ticks {
        out.push(dimension, [t, t], [cross_min, cross_max]);
    }
    out
}

/// Data-space rectangle between two adjacent major ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub dimension: Dimension,
    pub start: f64,
    pub end: f64,
    pub cross_min: f64,
    pub cross_max: f64,
}

impl Band {
    /// `(xs, ys)` of the two opposite corners: `(start, cross_min)` then `(end, cross_max)`.
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        let primary = [self.start, self.end];
        let cross = [self.cross_min, self.cross_max];
        match self.dimension {
            Dimension::Width => (primary, cross),
            Dimension::Height => (cross, primary),
        }
    }
}

/// Every other interval of a closed tick set, starting with the second
/// (pair index 1), so the first band never touches the lower plot edge.
pub fn partition_bands(ticks: &[f64], dimension: Dimension, cross_min: f64, cross_max: f64) -> Vec<Band> {
    ticks
        .windows(2)
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, w)| Band { dimension, start: w[0], end: w[1], cross_min, cross_max })
        .collect()
}
