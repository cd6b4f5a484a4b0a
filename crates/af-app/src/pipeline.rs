use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use af_ascii::luminance::{render_with, write_lines};
use af_core::config::{RenderConfig, load_config};
use af_source::image::load_image;
use af_source::resize::Resampler;
use anyhow::{Context, Result};

use crate::cli::{Cli, DEFAULT_CONFIG_PATH};

/// Resolve config: explicit --config must load, the default path is optional.
///
/// # Errors
/// Returns an error if an explicit config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = if let Some(ref path) = cli.config {
        load_config(path)?
    } else {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            load_config(path)?
        } else {
            log::info!(
                "Config introuvable : {}. Utilisation des défauts.",
                path.display()
            );
            RenderConfig::default()
        }
    };

    if cli.invert {
        config.invert = true;
    }
    Ok(config)
}

/// Load, optionally down-scale, then render the image to text lines.
///
/// # Errors
/// Returns an error if the image cannot be decoded, or if the requested width
/// exceeds the image width (only down-sampling is allowed).
pub fn convert(image: &Path, width: Option<u32>, config: &RenderConfig) -> Result<Vec<String>> {
    let source = load_image(image)?;

    let grid = match width.or(config.target_width) {
        Some(target) => Resampler::new().resample(&source, target).with_context(|| {
            format!(
                "Impossible de réduire {} à {target} colonnes",
                image.display()
            )
        })?,
        None => source,
    };

    let lines = render_with(&grid, config)?;
    log::info!("{} lignes rendues", lines.len());
    Ok(lines)
}

/// Full CLI flow: config, conversion, output.
///
/// # Errors
/// Propagates config, decoding, scaling and I/O errors.
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let lines = convert(&cli.image, cli.width, &config)?;

    if let Some(ref path) = cli.output {
        let file = File::create(path)
            .with_context(|| format!("Impossible de créer {}", path.display()))?;
        write_lines(&lines, BufWriter::new(file))
            .with_context(|| format!("Écriture impossible dans {}", path.display()))?;
        log::info!("Sortie écrite dans {}", path.display());
    } else {
        let stdout = io::stdout();
        write_lines(&lines, BufWriter::new(stdout.lock())).context("Écriture sur stdout")?;
    }
    Ok(())
}
