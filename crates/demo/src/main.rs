// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV, filters it by group and renders themed x/y grids to PNGs.

use anyhow::{Context, Result};
use graticule_core::theme;
use graticule_core::{
    Axis, BasicTicker, Column, ColumnDataSource, Dimension, Grid, GridView, GroupFilter, HatchPattern, HatchStyle,
    Range1d, TickerKind,
};
use graticule_render_skia::{render_to_png, RenderOptions};
use std::path::{Path, PathBuf};

// Usage: graticule-demo [data.csv] [column=group] [theme] [grid.json]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| "crates/demo/data/sensors.csv".to_string()));
    let group = args.next();
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));
    let grid_config = args.next().map(PathBuf::from);

    let source = load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    let rows = source.get_length().unwrap_or(0);
    println!("Loaded {} rows from {}", rows, path.display());
    if rows == 0 {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let indices = match group.as_deref().and_then(|g| g.split_once('=')) {
        Some((column, value)) => GroupFilter::new(column, value).compute_indices(&source),
        None => graticule_core::Indices::all_set(rows),
    };
    println!("Selected {} of {} rows", indices.count(), indices.size());

    let (x_col, y_col) = numeric_pair(&source)?;
    let xs: Vec<f64> = indices.select(x_col).copied().collect();
    let ys: Vec<f64> = indices.select(y_col).copied().collect();
    let x_range = padded(minmax(&xs), 0.0);
    let y_range = padded(minmax(&ys), 0.05);
    println!("x range [{:.3}, {:.3}], y range [{:.3}, {:.3}]", x_range.start, x_range.end, y_range.start, y_range.end);

    let mut opts = RenderOptions::default();
    opts.background = theme.background;
    let frame = opts.frame(x_range, y_range);

    let x_axis = Axis::default_x();
    let y_axis = Axis::default_y().with_ticker(Some(TickerKind::Basic(BasicTicker { desired_num_ticks: 8, num_minor_ticks: 4 })));
    let axes = vec![x_axis.view(&frame)?, y_axis.view(&frame)?];

    let mut x_grid = Grid::new(Dimension::Width).with_axis(x_axis);
    theme.apply(&mut x_grid);
    // A configured grid replaces the themed y grid as is.
    let mut y_grid = match &grid_config {
        Some(p) => load_grid(p).with_context(|| format!("failed to load grid config '{}'", p.display()))?,
        None => {
            let mut g = Grid::new(Dimension::Height).with_axis(y_axis);
            theme.apply(&mut g);
            g
        }
    };
    // Bands on one dimension only, otherwise the two patterns overlap.
    x_grid.band_fill = graticule_core::FillStyle::none();

    // 1) Plain major/minor lines with y bands
    let views = vec![GridView::new(x_grid.clone()), GridView::new(y_grid.clone())];
    let out_lines = out_name_with(&path, theme.name, "grid");
    render_to_png(&opts, &frame, &axes, &views, &out_lines)?;
    println!("Wrote {}", out_lines.display());
    let out_config = out_lines.with_extension("json");
    std::fs::write(&out_config, y_grid.to_json()?)
        .with_context(|| format!("writing {}", out_config.display()))?;
    println!("Wrote {}", out_config.display());

    // 2) Hatched x bands over the same frame
    x_grid.band_hatch = HatchStyle::with_pattern(HatchPattern::DiagonalUp, theme.grid_line.color.unwrap_or(theme.background));
    y_grid.band_fill = graticule_core::FillStyle::none();
    let views = vec![GridView::new(x_grid), GridView::new(y_grid)];
    let out_hatch = out_name_with(&path, theme.name, "hatch");
    render_to_png(&opts, &frame, &axes, &views, &out_hatch)?;
    println!("Wrote {}", out_hatch.display());

    Ok(())
}

/// Produce output file name like target/out/grid_<stem>_<theme>_<suffix>.png
fn out_name_with(input: &Path, theme: &str, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("grid_{}_{}_{}.png", stem, theme, suffix));
    out
}

fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let grid = Grid::from_json(&text)?;
    tracing::debug!(dimension = grid.dimension.index(), "loaded grid config");
    Ok(grid)
}

/// Load a headed CSV into columns; a column is numeric when every cell parses as f64.
fn load_csv(path: &Path) -> Result<ColumnDataSource> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for rec in rdr.records() {
        let rec = rec?;
        for (i, col) in cells.iter_mut().enumerate() {
            col.push(rec.get(i).unwrap_or("").trim().to_string());
        }
    }

    let mut source = ColumnDataSource::new();
    for (name, raw) in headers.into_iter().zip(cells) {
        let nums = raw.iter().map(|s| s.parse::<f64>()).collect::<Result<Vec<_>, _>>();
        let column = match nums {
            Ok(v) => Column::Num(v),
            Err(_) => Column::Str(raw),
        };
        source.insert(name, column);
    }
    Ok(source)
}

/// First two numeric columns in header order are x and y.
fn numeric_pair(source: &ColumnDataSource) -> Result<(&[f64], &[f64])> {
    let mut nums = source.column_names().filter_map(|n| source.get_column(n).and_then(Column::as_numbers));
    let x = nums.next().context("no numeric x column")?;
    let y = nums.next().context("no numeric y column")?;
    Ok((x, y))
}

fn minmax(v: &[f64]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &y in v {
        min_v = min_v.min(y);
        max_v = max_v.max(y);
    }
    (min_v, max_v)
}

fn padded((lo, hi): (f64, f64), frac: f64) -> Range1d {
    if !lo.is_finite() || !hi.is_finite() {
        return Range1d::new(0.0, 1.0);
    }
    let pad = ((hi - lo) * frac).max(if hi == lo { 0.5 } else { 0.0 });
    Range1d::new(lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graticule_core::{SingleIntervalTicker, TickerKind};

    // Purpose: the bundled grid config loads and a missing file reports its path.
    #[test]
    fn loads_grid_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/grid_y.json");
        let grid = load_grid(&path).expect("bundled config loads");
        assert_eq!(grid.dimension, Dimension::Height);
        assert_eq!(
            grid.ticker,
            Some(TickerKind::SingleInterval(SingleIntervalTicker { interval: 2.0, num_minor_ticks: 4 }))
        );
        assert!(grid.band_fill.is_visible());

        let err = load_grid(Path::new("no/such/grid.json")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/grid.json"));
    }
}
