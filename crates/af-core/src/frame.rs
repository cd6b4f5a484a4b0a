use crate::error::CoreError;

/// Grille de pixels RGB(A) rectangulaire, ancrée à l'origine.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel. L'alpha est
/// transporté mais jamais lu par le pipeline.
///
/// # Example
/// ```
/// use af_core::frame::PixelGrid;
/// let grid = PixelGrid::new(10, 10);
/// assert_eq!(grid.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelGrid {
    /// Crée une grille noire (alpha 0) aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use af_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(100, 50);
    /// assert_eq!(grid.width, 100);
    /// assert_eq!(grid.height, 50);
    /// assert_eq!(grid.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Build an opaque grid from row-major RGB samples.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if `samples.len() != width * height`.
    ///
    /// # Example
    /// ```
    /// use af_core::frame::PixelGrid;
    /// let grid = PixelGrid::from_rgb(2, 1, &[(255, 255, 255), (0, 0, 0)]).unwrap();
    /// assert_eq!(grid.at(0, 0), (255, 255, 255));
    /// assert_eq!(grid.at(1, 0), (0, 0, 0));
    /// ```
    pub fn from_rgb(
        width: u32,
        height: u32,
        samples: &[(u8, u8, u8)],
    ) -> Result<Self, CoreError> {
        if samples.len() != width as usize * height as usize {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let data = samples
            .iter()
            .flat_map(|&(r, g, b)| [r, g, b, 255])
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Grille uniforme, opaque.
    ///
    /// # Example
    /// ```
    /// use af_core::frame::PixelGrid;
    /// let grid = PixelGrid::filled(4, 4, (128, 128, 128));
    /// assert_eq!(grid.at(3, 3), (128, 128, 128));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let (r, g, b) = rgb;
        Self {
            data: [r, g, b, 255].repeat(width as usize * height as usize),
            width,
            height,
        }
    }

    /// True when the grid holds no pixel at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use af_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(10, 10);
    /// assert_eq!(grid.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = self.index(x, y);
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Accès au pixel (x, y) → (r, g, b). Valide pour `x < width`, `y < height`.
    #[inline(always)]
    #[must_use]
    pub fn at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let (r, g, b, _) = self.pixel(x, y);
        (r, g, b)
    }

    /// Écrit le pixel (x, y).
    ///
    /// # Example
    /// ```
    /// use af_core::frame::PixelGrid;
    /// let mut grid = PixelGrid::new(3, 3);
    /// grid.set(1, 2, (10, 20, 30, 255));
    /// assert_eq!(grid.pixel(1, 2), (10, 20, 30, 255));
    /// ```
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        let idx = self.index(x, y);
        let (r, g, b, a) = rgba;
        self.data[idx..idx + 4].copy_from_slice(&[r, g, b, a]);
    }
}
