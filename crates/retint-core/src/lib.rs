//! Retint Core — domain layer for pixel-level image transformations.
//!
//! This crate contains the RGB/HSL color model, the in-memory pixel grid,
//! and every transformation. No file-system or codec dependencies; loading
//! and saving images lives in `retint-io`.

pub mod color;
pub mod error;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use color::{Hsl, Rgb};
pub use error::ImageError;
pub use image::PixelGrid;
pub use transform::filter::{NoReferences, PreloadedReferences, ReferenceImages, decorative_filter};
pub use transform::pipeline::{Operation, apply_chain};
