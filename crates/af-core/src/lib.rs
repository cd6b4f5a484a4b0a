//! Shared types and configuration for asciify.
//!
//! This crate holds the pixel grid, the brightness palette, the error type
//! and the TOML configuration used across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::Palette;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::PixelGrid;
