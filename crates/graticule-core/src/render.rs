// File: crates/graticule-core/src/render.rs
// Summary: Grid render orchestration (bands, minor lines, major lines) with an explicit dirty flag.

use crate::error::Result;
use crate::geometry::snap;
use crate::grid::GridCoords;
use crate::model::{Grid, PlotContext};
use crate::paint::Painter;
use crate::scale::{CoordinateMapping, CoordinateView};
use crate::style::LineStyle;
use crate::ticker::TickLocation;

/// Owns a grid configuration and tracks whether it changed since the last draw.
#[derive(Clone, Debug)]
pub struct GridView {
    model: Grid,
    dirty: bool,
}

impl GridView {
    pub fn new(model: Grid) -> Self {
        Self { model, dirty: true }
    }

    pub fn model(&self) -> &Grid {
        &self.model
    }

    /// Mutate the configuration; the next `render_if_dirty` redraws.
    pub fn update(&mut self, f: impl FnOnce(&mut Grid)) {
        f(&mut self.model);
        self.dirty = true;
    }

    pub fn set_model(&mut self, model: Grid) {
        self.model = model;
        self.dirty = true;
    }

    /// Force a redraw on the next `render_if_dirty`, e.g. after the host changed ranges.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Render only when the configuration changed. Returns whether a pass ran.
    /// A failed pass leaves the view dirty.
    pub fn render_if_dirty<P: Painter + ?Sized>(&mut self, ctx: &PlotContext<'_>, painter: &mut P) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.render(ctx, painter)?;
        self.dirty = false;
        Ok(true)
    }

    /// One full pass: bands, then minor lines, then major lines. Painter
    /// state is restored even when a step fails.
    pub fn render<P: Painter + ?Sized>(&self, ctx: &PlotContext<'_>, painter: &mut P) -> Result<()> {
        tracing::debug!(dimension = self.model.dimension.index(), "rendering grid");
        painter.save();
        let result = self
            .draw_regions(ctx, painter)
            .and_then(|_| self.draw_minor_grids(ctx, painter))
            .and_then(|_| self.draw_grids(ctx, painter));
        painter.restore();
        result
    }

    fn coordinates(&self, ctx: &PlotContext<'_>) -> Result<CoordinateView> {
        ctx.frame.coordinates(&self.model.x_range_name, &self.model.y_range_name)
    }

    fn draw_regions<P: Painter + ?Sized>(&self, ctx: &PlotContext<'_>, painter: &mut P) -> Result<()> {
        let grid = &self.model;
        let fill = grid.band_fill.is_visible();
        let hatch = grid.band_hatch.is_visible();
        if !fill && !hatch {
            return Ok(());
        }

        let bands = grid.band_regions(ctx)?;
        tracing::trace!(bands = bands.len(), "drawing grid bands");
        let coords = self.coordinates(ctx)?;
        for band in &bands {
            let (xs, ys) = band.corners();
            let (sx, sy) = coords.map_to_screen(&xs, &ys);

            painter.begin_path();
            painter.rect(sx[0], sy[0], sx[1] - sx[0], sy[1] - sy[0]);
            if fill {
                painter.fill(&grid.band_fill)?;
            }
            if hatch {
                painter.hatch(&grid.band_hatch)?;
            }
        }
        Ok(())
    }

    fn draw_minor_grids<P: Painter + ?Sized>(&self, ctx: &PlotContext<'_>, painter: &mut P) -> Result<()> {
        if !self.model.minor_grid_line.is_visible() {
            return Ok(());
        }
        let segments = self.model.grid_coords(ctx, TickLocation::Minor, true)?;
        self.draw_lines(ctx, painter, &self.model.minor_grid_line, &segments)
    }

    fn draw_grids<P: Painter + ?Sized>(&self, ctx: &PlotContext<'_>, painter: &mut P) -> Result<()> {
        if !self.model.grid_line.is_visible() {
            return Ok(());
        }
        let segments = self.model.grid_coords(ctx, TickLocation::Major, true)?;
        self.draw_lines(ctx, painter, &self.model.grid_line, &segments)
    }

    fn draw_lines<P: Painter + ?Sized>(
        &self,
        ctx: &PlotContext<'_>,
        painter: &mut P,
        style: &LineStyle,
        segments: &GridCoords,
    ) -> Result<()> {
        tracing::trace!(lines = segments.len(), "drawing grid lines");
        let coords = self.coordinates(ctx)?;
        painter.set_line_style(style);
        painter.begin_path();
        for (xs, ys) in segments.segments() {
            let (sx, sy) = coords.map_to_screen(xs, ys);
            painter.move_to(snap(sx[0]), snap(sy[0]));
            for i in 1..sx.len() {
                painter.line_to(snap(sx[i]), snap(sy[i]));
            }
        }
        painter.stroke()
    }
}
