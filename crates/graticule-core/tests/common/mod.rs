// File: crates/graticule-core/tests/common/mod.rs
// Purpose: Shared fixtures: a recording painter and a 0..10 x 0..10 frame.

#![allow(dead_code)]

use graticule_core::{
    CartesianFrame, FillStyle, GridError, HatchStyle, LineStyle, Painter, Range1d, RectI32,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    LineStyle(LineStyle),
    Stroke,
    Fill(FillStyle),
    Hatch(HatchStyle),
}

/// Records every call; optionally fails the n-th stroke.
#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
    pub fail_stroke: Option<usize>,
    strokes: usize,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_stroke(n: usize) -> Self {
        Self { fail_stroke: Some(n), ..Self::default() }
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Rect(x, y, w, h) => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) { self.ops.push(Op::Save); }
    fn restore(&mut self) { self.ops.push(Op::Restore); }
    fn begin_path(&mut self) { self.ops.push(Op::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)); }
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::Rect(x, y, w, h)); }
    fn set_line_style(&mut self, style: &LineStyle) { self.ops.push(Op::LineStyle(style.clone())); }

    fn stroke(&mut self) -> graticule_core::Result<()> {
        self.strokes += 1;
        if self.fail_stroke == Some(self.strokes) {
            return Err(GridError::Paint(anyhow::anyhow!("surface lost")));
        }
        self.ops.push(Op::Stroke);
        Ok(())
    }

    fn fill(&mut self, style: &FillStyle) -> graticule_core::Result<()> {
        self.ops.push(Op::Fill(style.clone()));
        Ok(())
    }

    fn hatch(&mut self, style: &HatchStyle) -> graticule_core::Result<()> {
        self.ops.push(Op::Hatch(style.clone()));
        Ok(())
    }
}

/// Plot area 100x100 px at (0,0); both ranges 0..10, so one data unit is 10 px.
pub fn frame_0_10() -> CartesianFrame {
    CartesianFrame::new(
        RectI32::from_ltwh(0, 0, 100, 100),
        Range1d::new(0.0, 10.0),
        Range1d::new(0.0, 10.0),
    )
}
