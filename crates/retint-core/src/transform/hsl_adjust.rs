//! Uniform HSL channel replacement.
//!
//! Each pixel is converted to HSL, one field is replaced, and the result is
//! converted back. There are no neighborhood effects.

use crate::color::Hsl;
use crate::color::hsl::{clamp_unit, wrap_hue};
use crate::error::ImageError;
use crate::image::PixelGrid;

/// Set every pixel's hue to `hue` degrees, wrapped into `[0, 360)`.
///
/// Gray pixels have zero saturation and stay gray.
pub fn set_hue(image: &mut PixelGrid, hue: f64) -> Result<(), ImageError> {
    let hue = wrap_hue(hue)?;
    tracing::debug!(width = image.width(), height = image.height(), hue, "set hue");
    replace_field(image, |hsl| hsl.with_hue(hue))
}

/// Set every pixel's saturation, clamped to `[0, 1]`.
pub fn set_saturation(image: &mut PixelGrid, saturation: f64) -> Result<(), ImageError> {
    let saturation = clamp_unit("saturation", saturation)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        saturation,
        "set saturation"
    );
    replace_field(image, |hsl| hsl.with_saturation(saturation))
}

/// Set every pixel's lightness, clamped to `[0, 1]`.
pub fn set_lightness(image: &mut PixelGrid, lightness: f64) -> Result<(), ImageError> {
    let lightness = clamp_unit("lightness", lightness)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        lightness,
        "set lightness"
    );
    replace_field(image, |hsl| hsl.with_lightness(lightness))
}

/// The value is validated before the first pixel is touched, so `f` cannot
/// fail part-way through the grid.
fn replace_field(
    image: &mut PixelGrid,
    f: impl Fn(Hsl) -> Result<Hsl, ImageError>,
) -> Result<(), ImageError> {
    for px in image.pixels_mut() {
        *px = f(px.to_hsl())?.to_rgb();
    }
    Ok(())
}
