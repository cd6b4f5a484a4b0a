use crate::error::CoreError;

/// 65 caractères, du plus sombre (index 0) au plus lumineux (dernier index).
pub const BRIGHTNESS_SYMBOLS: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Nombre de symboles de la palette.
pub const PALETTE_LEN: usize = BRIGHTNESS_SYMBOLS.len();

/// Perceptual luma with the fixed 0.21 / 0.72 / 0.07 weights, rounded half to even.
///
/// # Example
/// ```
/// use af_core::charset::luminosity;
/// assert_eq!(luminosity(255, 255, 255), 255);
/// assert_eq!(luminosity(0, 0, 0), 0);
/// assert_eq!(luminosity(100, 0, 0), 21);
/// ```
#[inline(always)]
#[must_use]
pub fn luminosity(r: u8, g: u8, b: u8) -> u8 {
    let l = 0.21 * f64::from(r) + 0.72 * f64::from(g) + 0.07 * f64::from(b);
    l.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Map a luminosity [0..255] to a palette index [0..PALETTE_LEN-1].
///
/// # Example
/// ```
/// use af_core::charset::{symbol_index, PALETTE_LEN};
/// assert_eq!(symbol_index(0), 0);
/// assert_eq!(symbol_index(255), PALETTE_LEN - 1);
/// ```
#[inline(always)]
#[must_use]
pub fn symbol_index(luminosity: u8) -> usize {
    let scaled = f64::from(luminosity) * (PALETTE_LEN - 1) as f64 / 255.0;
    scaled.round_ties_even() as usize
}

/// Palette de luminosité avec une table de correspondance pré-calculée.
///
/// La table est construite une fois, puis chaque pixel coûte O(1).
///
/// # Example
/// ```
/// use af_core::charset::Palette;
/// let palette = Palette::standard().unwrap();
/// assert_eq!(palette.map(0), '`');
/// assert_eq!(palette.map(255), '$');
/// ```
#[derive(Clone, Debug)]
pub struct Palette {
    symbols: &'static [u8],
    lut: [char; 256],
}

impl Palette {
    /// Build the lookup table over [`BRIGHTNESS_SYMBOLS`].
    ///
    /// # Errors
    /// Returns [`CoreError::InternalInvariant`] if a luminosity maps outside the
    /// palette. This cannot happen with correct index arithmetic.
    pub fn standard() -> Result<Self, CoreError> {
        let mut palette = Self {
            symbols: BRIGHTNESS_SYMBOLS.as_bytes(),
            lut: [' '; 256],
        };
        for lum in 0..=u8::MAX {
            palette.lut[lum as usize] = palette.symbol(symbol_index(lum))?;
        }
        Ok(palette)
    }

    /// Symbol at `index`, darkest first.
    ///
    /// # Errors
    /// Returns [`CoreError::InternalInvariant`] if `index >= PALETTE_LEN`.
    pub fn symbol(&self, index: usize) -> Result<char, CoreError> {
        self.symbols.get(index).map(|&b| char::from(b)).ok_or_else(|| {
            CoreError::InternalInvariant(format!(
                "index de symbole {index} hors palette (taille {})",
                self.symbols.len()
            ))
        })
    }

    /// Map a luminosity value [0..255] to its symbol.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminosity: u8) -> char {
        self.lut[luminosity as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_the_reference_string() {
        assert_eq!(PALETTE_LEN, 65);
        assert!(BRIGHTNESS_SYMBOLS.is_ascii());
        assert!(BRIGHTNESS_SYMBOLS.starts_with("`^\""));
        assert!(BRIGHTNESS_SYMBOLS.ends_with("B@$"));
    }

    #[test]
    fn symbol_index_extremes_and_midpoint() {
        assert_eq!(symbol_index(0), 0);
        assert_eq!(symbol_index(255), 64);
        // 128 * 64 / 255 = 32.125
        assert_eq!(symbol_index(128), 32);
    }

    #[test]
    fn symbol_index_monotonic() {
        let mut prev = 0usize;
        for lum in 0..=255u8 {
            let idx = symbol_index(lum);
            assert!(idx >= prev, "index non monotone à luminosité {lum}");
            assert!(idx < PALETTE_LEN);
            prev = idx;
        }
    }

    #[test]
    fn luminosity_weights_and_clamp() {
        assert_eq!(luminosity(0, 100, 0), 72);
        assert_eq!(luminosity(0, 0, 100), 7);
        assert_eq!(luminosity(128, 128, 128), 128);
        assert_eq!(luminosity(255, 255, 255), 255);
    }

    #[test]
    fn lut_agrees_with_symbol_lookup() {
        let palette = Palette::standard().unwrap();
        for lum in 0..=255u8 {
            assert_eq!(palette.map(lum), palette.symbol(symbol_index(lum)).unwrap());
        }
    }

    #[test]
    fn out_of_range_symbol_is_invariant_error() {
        let palette = Palette::standard().unwrap();
        assert!(matches!(
            palette.symbol(PALETTE_LEN),
            Err(CoreError::InternalInvariant(_))
        ));
    }
}
