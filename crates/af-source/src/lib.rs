//! Pixel sources for asciify: image decoding and bicubic down-scaling.

pub mod image;
pub mod resize;
