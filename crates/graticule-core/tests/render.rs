// File: crates/graticule-core/tests/render.rs
// Purpose: Render orchestration against a recording painter: call order, style gating, pixel snapping, dirty flag.

mod common;

use common::{Op, RecordingPainter};
use graticule_core::{
    CartesianFrame, Color, Dimension, FillStyle, FixedTicker, Grid, GridView, HatchPattern, HatchStyle,
    LineStyle, PlotContext, Range1d, RectI32, TickerKind,
};

fn evens_grid(dimension: Dimension) -> Grid {
    let ticker = FixedTicker::new(vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]).with_minor(vec![1.0, 3.0]);
    Grid::new(dimension).with_ticker(TickerKind::Fixed(ticker))
}

#[test]
fn major_lines_only_by_default() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let grid = evens_grid(Dimension::Width);
    let style = grid.grid_line.clone();
    let view = GridView::new(grid);

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");

    let mut want = vec![Op::Save, Op::LineStyle(style), Op::BeginPath];
    for x in [20.0, 40.0, 60.0, 80.0] {
        want.push(Op::MoveTo(x, 100.0));
        want.push(Op::LineTo(x, 0.0));
    }
    want.push(Op::Stroke);
    want.push(Op::Restore);
    assert_eq!(painter.ops, want);
}

#[test]
fn horizontal_grid_lines_span_plot_width() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let view = GridView::new(evens_grid(Dimension::Height));

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");

    let moves = painter
        .ops
        .iter()
        .filter_map(|op| match *op {
            Op::MoveTo(x, y) => Some((x, y)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(moves, vec![(0.0, 80.0), (0.0, 60.0), (0.0, 40.0), (0.0, 20.0)]);
    assert_eq!(painter.count(|op| matches!(op, Op::LineTo(x, _) if *x == 100.0)), 4);
}

#[test]
fn passes_run_bands_then_minor_then_major() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let mut grid = evens_grid(Dimension::Width);
    grid.band_fill = FillStyle::solid(Color::rgb(240, 240, 240), 0.5);
    grid.minor_grid_line = LineStyle::solid(Color::rgb(200, 200, 200), 0.5);
    let minor = grid.minor_grid_line.clone();
    let major = grid.grid_line.clone();
    let view = GridView::new(grid);

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");

    let pos = |want: &Op| painter.ops.iter().position(|op| op == want).expect("op present");
    let first_fill = painter.ops.iter().position(|op| matches!(op, Op::Fill(_))).expect("fill");
    assert_eq!(painter.ops.first(), Some(&Op::Save));
    assert_eq!(painter.ops.last(), Some(&Op::Restore));
    assert!(first_fill < pos(&Op::LineStyle(minor)));
    assert!(pos(&Op::LineStyle(major.clone())) > first_fill);
    assert_eq!(painter.count(|op| matches!(op, Op::Stroke)), 2);

    // bands (2,4) and (6,8), full cross extent
    assert_eq!(painter.rects(), vec![(20.0, 100.0, 20.0, -100.0), (60.0, 100.0, 20.0, -100.0)]);
    assert_eq!(painter.count(|op| matches!(op, Op::Fill(_))), 2);
    assert_eq!(painter.count(|op| matches!(op, Op::Hatch(_))), 0);
}

#[test]
fn hatch_only_bands_are_drawn() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let mut grid = evens_grid(Dimension::Height);
    grid.grid_line = LineStyle::none();
    grid.band_hatch = HatchStyle::with_pattern(HatchPattern::DiagonalUp, Color::rgb(0, 0, 0));
    let view = GridView::new(grid);

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");

    assert_eq!(painter.count(|op| matches!(op, Op::Hatch(_))), 2);
    assert_eq!(painter.count(|op| matches!(op, Op::Fill(_))), 0);
    // y bands (2,4) and (6,8): x spans the plot, y flips
    assert_eq!(painter.rects(), vec![(0.0, 80.0, 100.0, -20.0), (0.0, 40.0, 100.0, -20.0)]);
}

#[test]
fn invisible_styles_skip_their_pass() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let mut grid = evens_grid(Dimension::Width);
    grid.grid_line = LineStyle::none();
    grid.band_fill = FillStyle::solid(Color::rgb(1, 2, 3), 0.0);
    let view = GridView::new(grid);

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");
    assert_eq!(painter.ops, vec![Op::Save, Op::Restore]);
}

#[test]
fn line_vertices_are_rounded_to_pixels() {
    let frame = CartesianFrame::new(
        RectI32::from_ltwh(0, 0, 33, 33),
        Range1d::new(0.0, 10.0),
        Range1d::new(0.0, 10.0),
    );
    let ctx = PlotContext::new(&frame, &[]);
    let view = GridView::new(evens_grid(Dimension::Width));

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");

    let xs = painter
        .ops
        .iter()
        .filter_map(|op| match *op {
            Op::MoveTo(x, _) => Some(x),
            _ => None,
        })
        .collect::<Vec<_>>();
    // 6.6, 13.2, 19.8, 26.4
    assert_eq!(xs, vec![7.0, 13.0, 20.0, 26.0]);
    assert!(painter.ops.iter().all(|op| match *op {
        Op::MoveTo(x, y) | Op::LineTo(x, y) => x.fract() == 0.0 && y.fract() == 0.0,
        _ => true,
    }));
}

#[test]
fn no_ticker_still_balances_state() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let view = GridView::new(Grid::new(Dimension::Width));

    let mut painter = RecordingPainter::new();
    view.render(&ctx, &mut painter).expect("render");
    assert_eq!(painter.count(|op| matches!(op, Op::MoveTo(..))), 0);
    assert_eq!(painter.ops.first(), Some(&Op::Save));
    assert_eq!(painter.ops.last(), Some(&Op::Restore));
}

#[test]
fn paint_failure_propagates_after_restore() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let mut grid = evens_grid(Dimension::Width);
    grid.minor_grid_line = LineStyle::solid(Color::rgb(200, 200, 200), 1.0);
    let view = GridView::new(grid);

    let mut painter = RecordingPainter::failing_on_stroke(1);
    let err = view.render(&ctx, &mut painter).unwrap_err();
    assert!(err.to_string().contains("surface lost"));
    assert_eq!(painter.ops.last(), Some(&Op::Restore));
    // major pass never started
    assert_eq!(painter.count(|op| matches!(op, Op::LineStyle(_))), 1);
}

#[test]
fn render_if_dirty_tracks_configuration_changes() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let mut view = GridView::new(evens_grid(Dimension::Width));
    let mut painter = RecordingPainter::new();

    assert!(view.is_dirty());
    assert!(view.render_if_dirty(&ctx, &mut painter).expect("first pass"));
    assert!(!view.is_dirty());
    assert!(!view.render_if_dirty(&ctx, &mut painter).expect("clean"));

    view.update(|g| g.grid_line.width = 2.0);
    assert!(view.is_dirty());
    assert_eq!(view.model().grid_line.width, 2.0);
    assert!(view.render_if_dirty(&ctx, &mut painter).expect("second pass"));
    assert_eq!(painter.count(|op| matches!(op, Op::Save)), 2);
}

#[test]
fn failed_pass_leaves_view_dirty() {
    let frame = common::frame_0_10();
    let ctx = PlotContext::new(&frame, &[]);
    let mut view = GridView::new(evens_grid(Dimension::Width));

    let mut painter = RecordingPainter::failing_on_stroke(1);
    assert!(view.render_if_dirty(&ctx, &mut painter).is_err());
    assert!(view.is_dirty());
}

#[test]
fn ranges_are_read_fresh_each_pass() {
    let mut frame = common::frame_0_10();
    let view = GridView::new(evens_grid(Dimension::Width));

    let mut before = RecordingPainter::new();
    view.render(&PlotContext::new(&frame, &[]), &mut before).expect("render");

    frame.set_x_range("default", Range1d::new(0.0, 20.0));
    let mut after = RecordingPainter::new();
    view.render(&PlotContext::new(&frame, &[]), &mut after).expect("render");

    assert!(before.ops.contains(&Op::MoveTo(20.0, 100.0)));
    // 10 is no longer an edge, so it gets a line at mid-plot
    assert!(after.ops.contains(&Op::MoveTo(50.0, 100.0)));
    assert!(after.ops.contains(&Op::MoveTo(10.0, 100.0)));
}
