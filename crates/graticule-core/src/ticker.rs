// File: crates/graticule-core/src/ticker.rs
// Summary: Tick generators (adaptive, single-interval, fixed) and the tick set they produce.

use serde::{Deserialize, Serialize};

use crate::types::Range1d;

/// Upper bound on generated major ticks; beyond it the interval is treated as degenerate.
const MAX_TICKS: f64 = 10_000.0;

/// Which tick category a grid pass draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickLocation {
    Major,
    Minor,
}

/// Tick positions along one dimension, in data units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

impl TickSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn take(self, location: TickLocation) -> Vec<f64> {
        match location {
            TickLocation::Major => self.major,
            TickLocation::Minor => self.minor,
        }
    }
}

/// Produces tick positions for the interval `[start, end]`.
///
/// `range` is the full visible range and `cross_loc` the cross-dimension
/// position the ticks will be drawn at; generators that do not vary with
/// position ignore both.
pub trait Ticker {
    fn get_ticks(&self, start: f64, end: f64, range: &Range1d, cross_loc: f64) -> TickSet;
}

/// Picks a "nice" interval (1, 2 or 5 times a power of ten) that yields
/// roughly `desired_num_ticks` majors across the requested span.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicTicker {
    pub desired_num_ticks: usize,
    pub num_minor_ticks: usize,
}

impl Default for BasicTicker {
    fn default() -> Self {
        Self { desired_num_ticks: 6, num_minor_ticks: 5 }
    }
}

impl BasicTicker {
    pub fn interval(&self, start: f64, end: f64) -> Option<f64> {
        let span = (end - start).abs();
        if !span.is_finite() || span <= 0.0 {
            return None;
        }
        let desired = self.desired_num_ticks.max(1) as f64;
        let rough = span / desired;
        let magnitude = 10f64.powf(rough.log10().floor());
        let mut best = magnitude;
        let mut best_err = f64::INFINITY;
        for mantissa in [1.0, 2.0, 5.0, 10.0] {
            let candidate = mantissa * magnitude;
            let err = (desired - span / candidate).abs();
            if err < best_err {
                best_err = err;
                best = candidate;
            }
        }
        Some(best)
    }
}

impl Ticker for BasicTicker {
    fn get_ticks(&self, start: f64, end: f64, _range: &Range1d, _cross_loc: f64) -> TickSet {
        match self.interval(start, end) {
            Some(interval) => interval_ticks(start, end, interval, self.num_minor_ticks),
            None => TickSet::empty(),
        }
    }
}

/// Ticks at every multiple of a fixed `interval`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SingleIntervalTicker {
    pub interval: f64,
    #[serde(default = "default_num_minor_ticks")]
    pub num_minor_ticks: usize,
}

fn default_num_minor_ticks() -> usize {
    5
}

impl SingleIntervalTicker {
    pub fn new(interval: f64) -> Self {
        Self { interval, num_minor_ticks: default_num_minor_ticks() }
    }
}

impl Ticker for SingleIntervalTicker {
    fn get_ticks(&self, start: f64, end: f64, _range: &Range1d, _cross_loc: f64) -> TickSet {
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return TickSet::empty();
        }
        interval_ticks(start, end, self.interval, self.num_minor_ticks)
    }
}

/// Returns exactly the configured positions, regardless of the requested interval.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedTicker {
    pub ticks: Vec<f64>,
    pub minor_ticks: Vec<f64>,
}

impl FixedTicker {
    pub fn new(ticks: Vec<f64>) -> Self {
        Self { ticks, minor_ticks: Vec::new() }
    }

    pub fn with_minor(mut self, minor_ticks: Vec<f64>) -> Self {
        self.minor_ticks = minor_ticks;
        self
    }
}

impl Ticker for FixedTicker {
    fn get_ticks(&self, _start: f64, _end: f64, _range: &Range1d, _cross_loc: f64) -> TickSet {
        TickSet { major: self.ticks.clone(), minor: self.minor_ticks.clone() }
    }
}

/// Serializable choice of tick generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TickerKind {
    Basic(BasicTicker),
    SingleInterval(SingleIntervalTicker),
    Fixed(FixedTicker),
}

impl Default for TickerKind {
    fn default() -> Self {
        TickerKind::Basic(BasicTicker::default())
    }
}

impl Ticker for TickerKind {
    fn get_ticks(&self, start: f64, end: f64, range: &Range1d, cross_loc: f64) -> TickSet {
        match self {
            TickerKind::Basic(t) => t.get_ticks(start, end, range, cross_loc),
            TickerKind::SingleInterval(t) => t.get_ticks(start, end, range, cross_loc),
            TickerKind::Fixed(t) => t.get_ticks(start, end, range, cross_loc),
        }
    }
}

/// Majors at multiples of `interval` inside `[start, end]`; each major
/// interval (plus one on either side) split into `num_minor` parts for minors.
/// Minor ticks never repeat a major position.
fn interval_ticks(start: f64, end: f64, interval: f64, num_minor: usize) -> TickSet {
    let (lo, hi) = (start.min(end), start.max(end));
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return TickSet::empty();
    }
    let first = (lo / interval).floor();
    let last = (hi / interval).ceil();
    // Quotients can overflow to infinity even for finite inputs.
    if !(first.is_finite() && last.is_finite()) || last - first > MAX_TICKS {
        tracing::debug!(interval, lo, hi, "tick interval too fine for span; no ticks generated");
        return TickSet::empty();
    }

    let eps = interval * 1e-9;
    let inside = |v: f64| v >= lo - eps && v <= hi + eps;
    let (first, last) = (first as i64, last as i64);

    let major = (first..=last)
        .map(|k| k as f64 * interval)
        .filter(|&v| inside(v))
        .collect::<Vec<_>>();

    let mut minor = Vec::new();
    if num_minor > 1 {
        let step = interval / num_minor as f64;
        for k in first.saturating_sub(1)..=last {
            let base = k as f64 * interval;
            for j in 1..num_minor {
                let v = base + j as f64 * step;
                if inside(v) {
                    minor.push(v);
                }
            }
        }
    }

    TickSet { major, minor }
}
