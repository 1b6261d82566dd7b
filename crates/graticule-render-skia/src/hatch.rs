// File: crates/graticule-render-skia/src/hatch.rs
// Summary: Hatch pattern line layout over a pixel rectangle; callers clip the lines to the hatched path.

use graticule_core::HatchPattern;

/// Line segment `[x0, y0, x1, y1]` in device pixels.
pub type Seg = [f32; 4];

/// Lines covering `(left, top, right, bottom)` for `pattern`, `spacing` px apart.
/// Diagonals overshoot the rectangle and rely on clipping.
pub fn hatch_segments(pattern: HatchPattern, bounds: (f32, f32, f32, f32), spacing: f32) -> Vec<Seg> {
    let (l, t, r, b) = bounds;
    if !(spacing > 0.0) || r <= l || b <= t {
        return Vec::new();
    }
    let mut out = Vec::new();
    match pattern {
        HatchPattern::Horizontal => horizontal(&mut out, l, t, r, b, spacing),
        HatchPattern::Vertical => vertical(&mut out, l, t, r, b, spacing),
        HatchPattern::Cross => {
            horizontal(&mut out, l, t, r, b, spacing);
            vertical(&mut out, l, t, r, b, spacing);
        }
        HatchPattern::DiagonalUp => diagonal_up(&mut out, l, t, r, b, spacing),
        HatchPattern::DiagonalDown => diagonal_down(&mut out, l, t, r, b, spacing),
        HatchPattern::DiagonalCross => {
            diagonal_up(&mut out, l, t, r, b, spacing);
            diagonal_down(&mut out, l, t, r, b, spacing);
        }
    }
    out
}

fn steps(from: f32, to: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let n = ((to - from) / spacing).floor() as usize;
    (0..=n).map(move |i| from + i as f32 * spacing)
}

fn horizontal(out: &mut Vec<Seg>, l: f32, t: f32, r: f32, b: f32, s: f32) {
    out.extend(steps(t, b, s).map(|y| [l, y, r, y]));
}

fn vertical(out: &mut Vec<Seg>, l: f32, t: f32, r: f32, b: f32, s: f32) {
    out.extend(steps(l, r, s).map(|x| [x, t, x, b]));
}

// "/" in screen space: x + y is constant along each line
fn diagonal_up(out: &mut Vec<Seg>, l: f32, t: f32, r: f32, b: f32, s: f32) {
    out.extend(steps(l + t, r + b, s).map(|c| [c - b, b, c - t, t]));
}

// "\" in screen space: x - y is constant along each line
fn diagonal_down(out: &mut Vec<Seg>, l: f32, t: f32, r: f32, b: f32, s: f32) {
    out.extend(steps(l - b, r - t, s).map(|c| [c + t, t, c + b, b]));
}
