use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Requested width is larger than the source: only down-sampling is allowed.
    #[error("Seul le sous-échantillonnage est autorisé : largeur {target} > {source_width}")]
    InvalidScale {
        /// Requested target width.
        target: u32,
        /// Width of the source grid.
        source_width: u32,
    },

    /// Internal arithmetic produced a value that must be impossible. Indicates a bug.
    #[error("Invariant interne violé : {0}")]
    InternalInvariant(String),

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
