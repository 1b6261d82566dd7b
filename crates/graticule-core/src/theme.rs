// File: crates/graticule-core/src/theme.rs
// Summary: Light/Dark theming for grid lines, minor lines and alternating bands.

use crate::model::Grid;
use crate::style::{Color, FillStyle, LineStyle};

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid_line: LineStyle,
    pub minor_grid_line: LineStyle,
    pub band_fill: FillStyle,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid_line: LineStyle::solid(Color::rgb(40, 40, 45), 1.0),
            minor_grid_line: LineStyle { alpha: 0.5, ..LineStyle::solid(Color::rgb(32, 32, 36), 1.0) },
            band_fill: FillStyle::solid(Color::rgb(28, 28, 32), 1.0),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            grid_line: LineStyle::solid(Color::rgb(0xe5, 0xe5, 0xe5), 1.0),
            minor_grid_line: LineStyle::none(),
            band_fill: FillStyle::none(),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36),                 // base03
            grid_line: LineStyle::solid(Color::rgb(0x07, 0x36, 0x42), 1.0), // base02
            minor_grid_line: LineStyle { alpha: 0.4, ..LineStyle::solid(Color::rgb(0x58, 0x6e, 0x75), 1.0) }, // base01
            band_fill: FillStyle::solid(Color::rgb(0x07, 0x36, 0x42), 0.5),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3),                 // base3
            grid_line: LineStyle::solid(Color::rgb(0xee, 0xe8, 0xd5), 1.0), // base2
            minor_grid_line: LineStyle { alpha: 0.4, ..LineStyle::solid(Color::rgb(0x93, 0xa1, 0xa1), 1.0) }, // base1
            band_fill: FillStyle::solid(Color::rgb(0xee, 0xe8, 0xd5), 0.5),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::rgb(0x00, 0x00, 0x00),
            grid_line: LineStyle::solid(Color::rgb(0x88, 0x88, 0x88), 1.0),
            minor_grid_line: LineStyle::solid(Color::rgb(0x33, 0x33, 0x33), 1.0),
            band_fill: FillStyle::none(),
        }
    }

    /// Copy this theme's line and band styles onto `grid`. Hatching is left alone.
    pub fn apply(&self, grid: &mut Grid) {
        grid.grid_line = self.grid_line.clone();
        grid.minor_grid_line = self.minor_grid_line.clone();
        grid.band_fill = self.band_fill.clone();
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
