// File: crates/graticule-render-skia/src/lib.rs
// Summary: Skia renderer: a `Painter` over a Skia canvas and headless PNG/RGBA output for grid views.

use anyhow::Result;
use graticule_core::geometry::RectI32;
use graticule_core::types::{Insets, HEIGHT, WIDTH};
use graticule_core::{
    AxisView, CartesianFrame, Color, FillStyle, GridView, HatchStyle, LineStyle, Painter, PlotContext, Range1d,
};
use skia_safe as skia;

pub mod hatch;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: Color,
    /// Stroke the plot rectangle after the grids; grid lines never land on it.
    pub border: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: Color::rgb(255, 255, 255),
            border: Some(Color::rgb(60, 60, 70)),
        }
    }
}

impl RenderOptions {
    pub fn plot_rect(&self) -> RectI32 {
        RectI32::inset(self.width, self.height, &self.insets)
    }

    /// A frame whose plot area is this surface minus its insets.
    pub fn frame(&self, x_range: Range1d, y_range: Range1d) -> CartesianFrame {
        CartesianFrame::new(self.plot_rect(), x_range, y_range)
    }
}

pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn alpha_of(c: Color, alpha: f32) -> f32 {
    (c.a as f32 / 255.0) * alpha.clamp(0.0, 1.0)
}

/// Canvas-backed painter. Paths accumulate until stroked, filled or hatched.
/// `save`/`restore` cover the line style and current path as well as the canvas state.
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    path: skia::Path,
    line: skia::Paint,
    saved: Vec<(skia::Path, skia::Paint)>,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, path: skia::Path::new(), line: stroke_paint(&LineStyle::default()), saved: Vec::new() }
    }
}

fn stroke_paint(style: &LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.width);
    if let Some(c) = style.color {
        paint.set_color(to_skia(c));
        paint.set_alpha_f(alpha_of(c, style.alpha));
    }
    if !style.dash.is_empty() {
        paint.set_path_effect(skia::PathEffect::dash(&style.dash, 0.0));
    }
    paint
}

impl Painter for SkiaPainter<'_> {
    fn save(&mut self) {
        self.canvas.save();
        self.saved.push((self.path.clone(), self.line.clone()));
    }

    fn restore(&mut self) {
        self.canvas.restore();
        if let Some((path, line)) = self.saved.pop() {
            self.path = path;
            self.line = line;
        }
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let r = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32).sorted();
        self.path.add_rect(r, None);
    }

    fn set_line_style(&mut self, style: &LineStyle) {
        self.line = stroke_paint(style);
    }

    fn stroke(&mut self) -> graticule_core::Result<()> {
        self.canvas.draw_path(&self.path, &self.line);
        Ok(())
    }

    fn fill(&mut self, style: &FillStyle) -> graticule_core::Result<()> {
        let Some(c) = style.color else { return Ok(()) };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(c));
        paint.set_alpha_f(alpha_of(c, style.alpha));
        self.canvas.draw_path(&self.path, &paint);
        Ok(())
    }

    fn hatch(&mut self, style: &HatchStyle) -> graticule_core::Result<()> {
        let Some(pattern) = style.pattern else { return Ok(()) };
        let b = *self.path.bounds();
        let segs = hatch::hatch_segments(pattern, (b.left, b.top, b.right, b.bottom), style.scale);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.weight);
        paint.set_color(to_skia(style.color));
        paint.set_alpha_f(alpha_of(style.color, style.alpha));

        self.canvas.save();
        self.canvas.clip_path(&self.path, skia::ClipOp::Intersect, true);
        for [x0, y0, x1, y1] in segs {
            self.canvas.draw_line((x0, y0), (x1, y1), &paint);
        }
        self.canvas.restore();
        Ok(())
    }
}

/// Clear the canvas, draw each grid in order, then the optional border.
pub fn draw_grids(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    frame: &CartesianFrame,
    axes: &[AxisView],
    views: &[GridView],
) -> Result<()> {
    canvas.clear(to_skia(opts.background));
    let ctx = PlotContext::new(frame, axes);
    let mut painter = SkiaPainter::new(canvas);
    for view in views {
        view.render(&ctx, &mut painter)?;
    }

    if let Some(border) = opts.border {
        let p = frame.plot;
        let mut paint = stroke_paint(&LineStyle::solid(border, 1.0));
        paint.set_anti_alias(false);
        let r = skia::Rect::from_ltrb(p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);
        canvas.draw_rect(r, &paint);
    }
    Ok(())
}

fn raster(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

/// Render to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(
    opts: &RenderOptions,
    frame: &CartesianFrame,
    axes: &[AxisView],
    views: &[GridView],
) -> Result<Vec<u8>> {
    let mut surface = raster(opts)?;
    draw_grids(surface.canvas(), opts, frame, axes, views)?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    tracing::debug!(bytes = data.as_bytes().len(), grids = views.len(), "encoded grid PNG");
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(
    opts: &RenderOptions,
    frame: &CartesianFrame,
    axes: &[AxisView],
    views: &[GridView],
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(opts, frame, axes, views)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(
    opts: &RenderOptions,
    frame: &CartesianFrame,
    axes: &[AxisView],
    views: &[GridView],
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster(opts)?;
    draw_grids(surface.canvas(), opts, frame, axes, views)?;

    let (w, h) = (opts.width.max(1) as u32, opts.height.max(1) as u32);
    let stride = w as usize * 4;
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let mut px = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
        anyhow::bail!("reading back raster pixels failed");
    }
    Ok((px, w, h, stride))
}
