//! Conversion between files/byte buffers and [`PixelGrid`].
//!
//! Decoding goes through the `image` crate, so every format it is built with
//! is accepted. Alpha is discarded: grids are RGB only.

use std::io::{Cursor, ErrorKind};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use retint_core::{PixelGrid, Rgb};

use crate::error::IoError;

/// Load an image from disk.
///
/// A missing file is reported as [`IoError::NotFound`]; a file that exists
/// but cannot be decoded as [`IoError::Decode`].
pub fn load_image(path: &Path) -> Result<PixelGrid, IoError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Io(e),
    })?;
    let grid = decode_image(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded image"
    );
    Ok(grid)
}

/// Decode an in-memory encoded image, guessing the format from its header.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, IoError> {
    let img = image::load_from_memory(bytes).map_err(IoError::Decode)?;
    from_rgb_image(&img.to_rgb8())
}

/// Save to `path`, choosing the format from the file extension.
pub fn save_image(grid: &PixelGrid, path: &Path) -> Result<(), IoError> {
    let format = ImageFormat::from_path(path).map_err(IoError::Encode)?;
    save_image_with_format(grid, path, format)
}

/// Save to `path` in an explicit format.
pub fn save_image_with_format(
    grid: &PixelGrid,
    path: &Path,
    format: ImageFormat,
) -> Result<(), IoError> {
    to_rgb_image(grid)
        .save_with_format(path, format)
        .map_err(encode_error)?;
    tracing::info!(path = %path.display(), ?format, "saved image");
    Ok(())
}

/// Encode into an in-memory buffer.
pub fn encode_image(grid: &PixelGrid, format: ImageFormat) -> Result<Vec<u8>, IoError> {
    let mut out = Cursor::new(Vec::new());
    to_rgb_image(grid)
        .write_to(&mut out, format)
        .map_err(encode_error)?;
    Ok(out.into_inner())
}

/// Copy an `image` buffer into a grid. Zero-sized buffers are rejected.
pub fn from_rgb_image(img: &RgbImage) -> Result<PixelGrid, IoError> {
    let (width, height) = img.dimensions();
    let pixels = img.pixels().map(|p| Rgb::from(p.0)).collect();
    Ok(PixelGrid::from_pixels(width, height, pixels)?)
}

pub fn to_rgb_image(grid: &PixelGrid) -> RgbImage {
    let width = grid.width() as usize;
    let pixels = grid.pixels();
    RgbImage::from_fn(grid.width(), grid.height(), |x, y| {
        image::Rgb(pixels[y as usize * width + x as usize].channels())
    })
}

fn encode_error(e: image::ImageError) -> IoError {
    match e {
        image::ImageError::IoError(io) => IoError::Io(io),
        other => IoError::Encode(other),
    }
}
