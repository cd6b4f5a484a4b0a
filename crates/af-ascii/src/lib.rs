//! Luminosity quantizer for asciify.
//!
//! Converts pixel grids to lines of brightness symbols.

pub mod luminance;
