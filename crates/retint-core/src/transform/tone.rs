//! Per-pixel tone operations: grayscale, inversion and sepia.

use crate::color::Rgb;
use crate::image::PixelGrid;

/// Sepia matrix rows, `[r, g, b]` coefficients per output channel.
///
/// The blue row applies its last coefficient to green, not blue.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Replace every channel with the integer mean `(r + g + b) / 3`.
///
/// Afterwards `r == g == b` for every pixel, and a second pass is a no-op.
pub fn grayscale(image: &mut PixelGrid) {
    tracing::debug!(width = image.width(), height = image.height(), "grayscale");
    image.map_pixels(gray_pixel);
}

/// Replace every channel `c` with `255 − c`. Applying it twice restores the
/// original image.
pub fn invert(image: &mut PixelGrid) {
    tracing::debug!(width = image.width(), height = image.height(), "invert");
    image.map_pixels(|px| px.map(|c| 255 - c));
}

/// Apply the sepia matrix, truncating and clamping each channel to `[0, 255]`.
///
/// ```text
/// r' = 0.393 r + 0.769 g + 0.189 b
/// g' = 0.349 r + 0.686 g + 0.168 b
/// b' = 0.272 r + 0.534 g + 0.131 g
/// ```
pub fn sepia(image: &mut PixelGrid) {
    tracing::debug!(width = image.width(), height = image.height(), "sepia");
    image.map_pixels(sepia_pixel);
}

pub(crate) fn gray_pixel(px: Rgb) -> Rgb {
    let sum = u16::from(px.red) + u16::from(px.green) + u16::from(px.blue);
    Rgb::gray((sum / 3) as u8)
}

pub(crate) fn sepia_pixel(px: Rgb) -> Rgb {
    let r = f64::from(px.red);
    let g = f64::from(px.green);
    let b = f64::from(px.blue);
    let [red, green, blue] = SEPIA;
    Rgb::from_truncated(
        red[0] * r + red[1] * g + red[2] * b,
        green[0] * r + green[1] * g + green[2] * b,
        blue[0] * r + blue[1] * g + blue[2] * g,
    )
}
