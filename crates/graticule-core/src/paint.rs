// File: crates/graticule-core/src/paint.rs
// Summary: Renderer-agnostic paint capability the grid orchestrator draws through.

use crate::error::Result;
use crate::style::{FillStyle, HatchStyle, LineStyle};

/// Canvas-like drawing surface in device coordinates.
///
/// Path building is infallible; the compositing calls (`stroke`, `fill`,
/// `hatch`) may fail and their errors propagate to the caller untouched.
pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Line style used by the next `stroke`.
    fn set_line_style(&mut self, style: &LineStyle);
    fn stroke(&mut self) -> Result<()>;

    /// Fill the current path.
    fn fill(&mut self, style: &FillStyle) -> Result<()>;
    /// Hatch the current path.
    fn hatch(&mut self, style: &HatchStyle) -> Result<()>;
}
