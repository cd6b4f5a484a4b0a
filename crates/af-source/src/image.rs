use std::path::Path;

use af_core::frame::PixelGrid;
use anyhow::{Context, Result};
use image::DynamicImage;

/// Convertit une image décodée en grille RGBA8.
///
/// # Example
/// ```
/// use af_source::image::grid_from_image;
/// let img = image::DynamicImage::new_rgb8(3, 2);
/// let grid = grid_from_image(&img);
/// assert_eq!((grid.width, grid.height), (3, 2));
/// ```
#[must_use]
pub fn grid_from_image(img: &DynamicImage) -> PixelGrid {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelGrid {
        data: rgba.into_raw(),
        width,
        height,
    }
}

/// Load an image from disk. The format is detected from the content.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use af_source::image::load_image;
/// use std::path::Path;
/// let grid = load_image(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let img = image::ImageReader::open(path)
        .with_context(|| format!("Impossible d'ouvrir {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Impossible de lire {}", path.display()))?
        .decode()
        .with_context(|| format!("Impossible de décoder {}", path.display()))?;
    let grid = grid_from_image(&img);
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        grid.width,
        grid.height
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn load_png_roundtrips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.png");
        let mut img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        img.put_pixel(2, 1, Rgb([255, 0, 128]));
        img.save(&path).unwrap();

        let grid = load_image(&path).unwrap();
        assert_eq!((grid.width, grid.height), (3, 2));
        assert_eq!(grid.at(0, 0), (10, 20, 30));
        assert_eq!(grid.pixel(2, 1), (255, 0, 128, 255));
    }

    #[test]
    fn format_is_sniffed_not_taken_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("fixture.png");
        RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])).save(&png).unwrap();
        let renamed = dir.path().join("fixture.data");
        std::fs::rename(&png, &renamed).unwrap();

        assert_eq!(load_image(&renamed).unwrap().at(0, 0), (1, 2, 3));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_image(&dir.path().join("absent.png")).is_err());
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_image(&path).is_err());
    }
}
