use std::io::{self, Write};

use af_core::charset::{Palette, luminosity};
use af_core::config::RenderConfig;
use af_core::error::CoreError;
use af_core::frame::PixelGrid;

/// Render a grid to text lines with the default settings
/// (each symbol emitted three times, no inversion).
///
/// One line per pixel row, `3 * width` characters each. An empty grid renders
/// to no line at all.
///
/// # Errors
/// Returns [`CoreError::InternalInvariant`] if the palette lookup table cannot
/// be built, which indicates a bug rather than bad input.
///
/// # Example
/// ```
/// use af_core::frame::PixelGrid;
/// use af_ascii::luminance::render;
///
/// let grid = PixelGrid::from_rgb(2, 1, &[(255, 255, 255), (0, 0, 0)]).unwrap();
/// assert_eq!(render(&grid).unwrap(), vec!["$$$```".to_string()]);
/// ```
pub fn render(grid: &PixelGrid) -> Result<Vec<String>, CoreError> {
    render_with(grid, &RenderConfig::default())
}

/// Render a grid to text lines, honouring `cell_repeat` and `invert`.
///
/// Pixels are visited row-major, `y` outer and `x` inner.
///
/// # Errors
/// Returns [`CoreError::InternalInvariant`] if the palette lookup table cannot
/// be built.
///
/// # Example
/// ```
/// use af_core::frame::PixelGrid;
/// use af_core::config::RenderConfig;
/// use af_ascii::luminance::render_with;
///
/// let grid = PixelGrid::filled(2, 1, (0, 0, 0));
/// let config = RenderConfig { cell_repeat: 1, invert: true, ..RenderConfig::default() };
/// assert_eq!(render_with(&grid, &config).unwrap(), vec!["$$".to_string()]);
/// ```
pub fn render_with(grid: &PixelGrid, config: &RenderConfig) -> Result<Vec<String>, CoreError> {
    if grid.is_empty() {
        return Ok(Vec::new());
    }

    let palette = Palette::standard()?;
    let repeat = config.cell_repeat.max(1);
    let mut lines = Vec::with_capacity(grid.height as usize);

    for y in 0..grid.height {
        let mut line = String::with_capacity(grid.width as usize * repeat);
        for x in 0..grid.width {
            let (r, g, b) = grid.at(x, y);
            let mut lum = luminosity(r, g, b);
            if config.invert {
                lum = 255 - lum;
            }
            let ch = palette.map(lum);
            line.extend(std::iter::repeat_n(ch, repeat));
        }
        lines.push(line);
    }

    log::debug!(
        "Rendu de {} lignes de {} caractères",
        lines.len(),
        grid.width as usize * repeat
    );
    Ok(lines)
}

/// Write each line followed by a newline.
///
/// # Errors
/// Returns any I/O error from `out`.
///
/// # Example
/// ```
/// use af_ascii::luminance::write_lines;
/// let mut out = Vec::new();
/// write_lines(&["ab".to_string(), "cd".to_string()], &mut out).unwrap();
/// assert_eq!(out, b"ab\ncd\n");
/// ```
pub fn write_lines<W: Write>(lines: &[String], mut out: W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
