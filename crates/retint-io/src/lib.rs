//! Retint I/O — file loading and saving, plus resolution of the decorative
//! filter's reference images from configuration.
//!
//! The transformations in `retint-core` only see in-memory grids; this crate
//! is where paths, byte buffers and codecs are handled.

mod assets;
mod codec;
mod error;

pub use assets::{
    AssetSource, DEFAULT_GRAIN_PATH, DEFAULT_HALO_PATH, GRAIN_PATH_ENV, HALO_PATH_ENV,
    ReferenceAssets,
};
pub use codec::{
    decode_image, encode_image, from_rgb_image, load_image, save_image, save_image_with_format,
    to_rgb_image,
};
pub use error::IoError;
pub use image::ImageFormat;
