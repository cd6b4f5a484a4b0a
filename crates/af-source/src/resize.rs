use af_core::error::CoreError;
use af_core::frame::PixelGrid;

/// Paramètre `a` du noyau de convolution cubique (Keys, Catmull-Rom).
pub const CUBIC_A: f64 = -0.5;

/// Noyau de convolution cubique, support ]-2, 2[.
///
/// # Example
/// ```
/// use af_source::resize::{cubic_weight, CUBIC_A};
/// assert_eq!(cubic_weight(0.0, CUBIC_A), 1.0);
/// assert_eq!(cubic_weight(1.0, CUBIC_A), 0.0);
/// assert_eq!(cubic_weight(2.0, CUBIC_A), 0.0);
/// ```
#[inline(always)]
#[must_use]
pub fn cubic_weight(t: f64, a: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        (a + 2.0) * t.powi(3) - (a + 3.0) * t.powi(2) + 1.0
    } else if t < 2.0 {
        a * t.powi(3) - 5.0 * a * t.powi(2) + 8.0 * a * t - 4.0 * a
    } else {
        0.0
    }
}

/// Dimensions de sortie pour une largeur cible. Le facteur est uniforme et
/// la hauteur est tronquée : `floor(height * target_width / width)`.
///
/// # Errors
/// Returns [`CoreError::InvalidScale`] if `target_width > source_width`.
///
/// # Example
/// ```
/// use af_source::resize::target_dimensions;
/// assert_eq!(target_dimensions(100, 75, 40).unwrap(), (40, 30));
/// assert_eq!(target_dimensions(3, 5, 2).unwrap(), (2, 3));
/// assert!(target_dimensions(10, 10, 11).is_err());
/// ```
pub fn target_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
) -> Result<(u32, u32), CoreError> {
    if target_width > source_width {
        return Err(CoreError::InvalidScale {
            target: target_width,
            source_width,
        });
    }
    if target_width == 0 {
        return Ok((0, 0));
    }
    let height = u64::from(source_height) * u64::from(target_width) / u64::from(source_width);
    Ok((target_width, height as u32))
}

/// Four horizontal or vertical taps for one output column or row.
#[derive(Clone, Copy, Debug, Default)]
struct Taps {
    /// Source coordinate of the first tap (`floor(center) - 1`).
    first: i64,
    weights: [f64; 4],
}

impl Taps {
    fn at(dst: u32, scale: f64) -> Self {
        let center = (f64::from(dst) + 0.5) / scale - 0.5;
        let origin = center.floor();
        let sigma = center - origin;
        Self {
            first: origin as i64 - 1,
            weights: [
                cubic_weight(-1.0 - sigma, CUBIC_A),
                cubic_weight(-sigma, CUBIC_A),
                cubic_weight(1.0 - sigma, CUBIC_A),
                cubic_weight(2.0 - sigma, CUBIC_A),
            ],
        }
    }
}

/// Rééchantillonneur bicubique réutilisable (sous-échantillonnage uniquement).
///
/// Les poids 1D ne dépendent que de la colonne (resp. de la ligne) de
/// sortie : ils sont calculés une fois par axe puis combinés en une matrice
/// 4×4 locale pour chaque pixel. Les tables sont conservées entre appels.
/// Les taps hors de la source contribuent (0, 0, 0).
///
/// # Example
/// ```
/// use af_source::resize::Resampler;
/// use af_core::frame::PixelGrid;
/// let mut r = Resampler::new();
/// let src = PixelGrid::filled(8, 6, (50, 100, 150));
/// let dst = r.resample(&src, 4).unwrap();
/// assert_eq!((dst.width, dst.height), (4, 3));
/// ```
#[derive(Debug)]
pub struct Resampler {
    columns: Vec<Taps>,
    rows: Vec<Taps>,
}

impl Resampler {
    /// Create a resampler with the `a = -0.5` cubic kernel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Scale `src` down to `target_width` columns, preserving the aspect ratio.
    ///
    /// `target_width == 0` yields an empty grid.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidScale`] if `target_width > src.width`,
    /// before any pixel work.
    pub fn resample(
        &mut self,
        src: &PixelGrid,
        target_width: u32,
    ) -> Result<PixelGrid, CoreError> {
        let (width, height) = target_dimensions(src.width, src.height, target_width)?;
        let mut dst = PixelGrid::new(width, height);
        if dst.is_empty() {
            log::debug!(
                "Rééchantillonnage {}×{} → grille vide",
                src.width,
                src.height
            );
            return Ok(dst);
        }

        let scale = f64::from(width) / f64::from(src.width);
        log::debug!(
            "Rééchantillonnage bicubique {}×{} → {width}×{height} (échelle {scale:.4})",
            src.width,
            src.height
        );

        self.columns.clear();
        self.columns.extend((0..width).map(|x| Taps::at(x, scale)));
        self.rows.clear();
        self.rows.extend((0..height).map(|y| Taps::at(y, scale)));

        for (y1, row) in (0..height).zip(&self.rows) {
            for (x1, col) in (0..width).zip(&self.columns) {
                let rgb = convolve(src, col, row);
                dst.set(x1, y1, (rgb[0], rgb[1], rgb[2], 255));
            }
        }

        Ok(dst)
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new()
    }
}

/// 4×4 stencil around one output pixel. Clamps then truncates each channel.
#[inline(always)]
fn convolve(src: &PixelGrid, col: &Taps, row: &Taps) -> [u8; 3] {
    let mut weights = [[0.0f64; 4]; 4];
    for (v, line) in weights.iter_mut().enumerate() {
        for (u, w) in line.iter_mut().enumerate() {
            *w = col.weights[u] * row.weights[v];
        }
    }

    let width = i64::from(src.width);
    let height = i64::from(src.height);
    let mut acc = [0.0f64; 3];
    for (v, line) in weights.iter().enumerate() {
        let ty = row.first + v as i64;
        if ty < 0 || ty >= height {
            continue;
        }
        for (u, &w) in line.iter().enumerate() {
            let tx = col.first + u as i64;
            if tx < 0 || tx >= width {
                continue;
            }
            let (r, g, b) = src.at(tx as u32, ty as u32);
            acc[0] += w * f64::from(r);
            acc[1] += w * f64::from(g);
            acc[2] += w * f64::from(b);
        }
    }

    acc.map(|c| c.clamp(0.0, 255.0) as u8)
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns [`CoreError::InvalidScale`] if `target_width > src.width`.
///
/// # Example
/// ```
/// use af_source::resize::resample;
/// use af_core::frame::PixelGrid;
/// let src = PixelGrid::new(100, 100);
/// let dst = resample(&src, 50).unwrap();
/// assert_eq!(dst.width, 50);
/// assert_eq!(dst.height, 50);
/// ```
pub fn resample(src: &PixelGrid, target_width: u32) -> Result<PixelGrid, CoreError> {
    Resampler::new().resample(src, target_width)
}
