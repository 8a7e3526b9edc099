//! Geometric transforms.

use crate::error::ImageError;
use crate::image::PixelGrid;

/// Rotate 90° clockwise into a newly allocated grid.
///
/// The output is `height × width`; input pixel `(x, y)` lands at
/// `(height − 1 − y, x)`. The input is left untouched.
pub fn rotate_clockwise(image: &PixelGrid) -> Result<PixelGrid, ImageError> {
    let (width, height) = image.dimensions();
    tracing::debug!(width, height, "rotate clockwise");

    let src = image.pixels();
    // Output pixel (ox, oy) comes from input (oy, height - 1 - ox).
    PixelGrid::from_fn(height, width, |ox, oy| {
        let x = oy;
        let y = height - 1 - ox;
        src[y as usize * width as usize + x as usize]
    })
}
