use std::path::PathBuf;

use clap::Parser;

/// Chemin de configuration essayé quand `--config` est absent.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// asciify — image to brightness-mosaic ASCII art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF). Le format est détecté au contenu.
    pub image: PathBuf,

    /// Largeur cible en pixels. Sous-échantillonnage bicubique uniquement.
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Fichier de configuration TOML. Défaut : config/default.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Écrire le texte dans ce fichier au lieu de la sortie standard.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Inverser la luminosité (terminal à fond clair).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["asciify", "photo.jpg"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("photo.jpg"));
        assert_eq!(cli.width, None);
        assert_eq!(cli.config, None);
        assert!(!cli.invert);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "asciify",
            "photo.jpg",
            "-w",
            "80",
            "--config",
            "my.toml",
            "-o",
            "out.txt",
            "--invert",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.width, Some(80));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.invert);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn rejects_missing_image_and_bad_width() {
        assert!(Cli::try_parse_from(["asciify"]).is_err());
        assert!(Cli::try_parse_from(["asciify", "a.png", "--width", "-3"]).is_err());
        assert!(Cli::try_parse_from(["asciify", "a.png", "--width", "large"]).is_err());
    }
}
