use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Nombre de répétitions par défaut de chaque symbole (ratio d'aspect d'une cellule).
pub const DEFAULT_CELL_REPEAT: usize = 3;

/// Configuration du rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use af_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.cell_repeat, 3);
/// assert!(config.target_width.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Largeur cible par défaut (sous-échantillonnage bicubique). `None` = taille native.
    pub target_width: Option<u32>,
    /// Nombre d'émissions de chaque symbole, [1, 8].
    pub cell_repeat: usize,
    /// Inverser la luminosité (pour fond clair).
    pub invert: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_width: None,
            cell_repeat: DEFAULT_CELL_REPEAT,
            invert: false,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.cell_repeat = self.cell_repeat.clamp(1, 8);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    target_width: Option<u32>,
    cell_repeat: Option<usize>,
    invert: Option<bool>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use af_core::config::parse_config;
/// let config = parse_config("[render]\ntarget_width = 80\n").unwrap();
/// assert_eq!(config.target_width, Some(80));
/// assert_eq!(config.cell_repeat, 3);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.target_width {
            config.target_width = Some(v);
        }
        if let Some(v) = r.cell_repeat {
            config.cell_repeat = v;
        }
        if let Some(v) = r.invert {
            config.invert = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use af_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn partial_section_overrides_only_given_fields() {
        let config = parse_config("[render]\ninvert = true\n").unwrap();
        assert!(config.invert);
        assert_eq!(config.cell_repeat, DEFAULT_CELL_REPEAT);
        assert_eq!(config.target_width, None);
    }

    #[test]
    fn cell_repeat_is_clamped() {
        assert_eq!(parse_config("[render]\ncell_repeat = 0\n").unwrap().cell_repeat, 1);
        assert_eq!(parse_config("[render]\ncell_repeat = 99\n").unwrap().cell_repeat, 8);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(parse_config("[render\nwidth = ").is_err());
        assert!(parse_config("[render]\ntarget_width = \"wide\"\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ntarget_width = 40\ncell_repeat = 2").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.target_width, Some(40));
        assert_eq!(config.cell_repeat, 2);
    }

    #[test]
    fn load_config_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
