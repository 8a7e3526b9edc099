//! Composite decorative filter: warm tone, vignette and grain.
//!
//! The vignette and grain come from two reference images supplied by the
//! caller through [`ReferenceImages`]. The filter never locates them itself.
//!
//! # Algorithm
//! 1. Warm every pixel: `b = floor(b / 1.5)`, `r = min(floor(r × 1.2), 255)`
//! 2. Blend with the halo: `c = 0.65 × c + 0.35 × halo`
//! 3. Blend with the grain: `c = 0.95 × c + 0.5 × grain`
//!
//! Weights in step 3 sum to 1.45, so bright areas saturate at 255.
//! Each step truncates toward zero and clamps to `[0, 255]`.

use crate::color::Rgb;
use crate::error::ImageError;
use crate::image::PixelGrid;

/// Red gain of the warm-tone step.
pub const WARM_RED_GAIN: f64 = 1.2;
/// Blue divisor of the warm-tone step.
pub const WARM_BLUE_DIVISOR: f64 = 1.5;

pub const HALO_SOURCE_WEIGHT: f64 = 0.65;
pub const HALO_WEIGHT: f64 = 0.35;
pub const GRAIN_SOURCE_WEIGHT: f64 = 0.95;
pub const GRAIN_WEIGHT: f64 = 0.5;

/// Source of the two overlays used by [`decorative_filter`].
///
/// Each call returns an owned grid, so [`PreloadedReferences`] clones both
/// overlays on every filter application.
pub trait ReferenceImages {
    /// Vignette overlay. Failure to obtain it is a
    /// [`ImageError::ResourceUnavailable`].
    fn halo(&self) -> Result<PixelGrid, ImageError>;

    /// Grain overlay.
    fn grain(&self) -> Result<PixelGrid, ImageError>;
}

/// Reference images already held in memory.
#[derive(Debug, Clone)]
pub struct PreloadedReferences {
    pub halo: PixelGrid,
    pub grain: PixelGrid,
}

impl ReferenceImages for PreloadedReferences {
    fn halo(&self) -> Result<PixelGrid, ImageError> {
        Ok(self.halo.clone())
    }

    fn grain(&self) -> Result<PixelGrid, ImageError> {
        Ok(self.grain.clone())
    }
}

/// No reference images configured. Every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReferences;

impl ReferenceImages for NoReferences {
    fn halo(&self) -> Result<PixelGrid, ImageError> {
        Err(ImageError::ResourceUnavailable("no halo image configured".into()))
    }

    fn grain(&self) -> Result<PixelGrid, ImageError> {
        Err(ImageError::ResourceUnavailable("no grain image configured".into()))
    }
}

/// Apply the full warm/vignette/grain filter in place.
///
/// Both reference images are obtained and checked against the source size
/// before any pixel changes, so on error `image` is untouched.
pub fn decorative_filter<R>(image: &mut PixelGrid, references: &R) -> Result<(), ImageError>
where
    R: ReferenceImages + ?Sized,
{
    let halo = references.halo()?;
    let grain = references.grain()?;
    ensure_same_size("halo image", image, &halo)?;
    ensure_same_size("grain image", image, &grain)?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "decorative filter"
    );

    warm_tone(image);
    blend(image, &halo, HALO_SOURCE_WEIGHT, HALO_WEIGHT)?;
    blend(image, &grain, GRAIN_SOURCE_WEIGHT, GRAIN_WEIGHT)?;
    Ok(())
}

/// Warm-tone step alone: more red, less blue, green unchanged.
pub fn warm_tone(image: &mut PixelGrid) {
    image.map_pixels(warm_pixel);
}

/// Weighted per-channel blend of `overlay` into `base`.
///
/// ```text
/// c = trunc(base_weight × c + overlay_weight × overlay_c), clamped to [0, 255]
/// ```
///
/// Weights are not normalized. Fails with
/// [`ImageError::InvalidDimensions`] when the sizes differ.
pub fn blend(
    base: &mut PixelGrid,
    overlay: &PixelGrid,
    base_weight: f64,
    overlay_weight: f64,
) -> Result<(), ImageError> {
    ensure_same_size("overlay", base, overlay)?;
    for (px, &over) in base.pixels_mut().iter_mut().zip(overlay.pixels()) {
        let mix = |a: u8, b: u8| base_weight * f64::from(a) + overlay_weight * f64::from(b);
        *px = Rgb::from_truncated(
            mix(px.red, over.red),
            mix(px.green, over.green),
            mix(px.blue, over.blue),
        );
    }
    Ok(())
}

fn warm_pixel(px: Rgb) -> Rgb {
    Rgb::from_truncated(
        f64::from(px.red) * WARM_RED_GAIN,
        f64::from(px.green),
        f64::from(px.blue) / WARM_BLUE_DIVISOR,
    )
}

fn ensure_same_size(what: &str, source: &PixelGrid, other: &PixelGrid) -> Result<(), ImageError> {
    if source.same_dimensions(other) {
        Ok(())
    } else {
        Err(ImageError::dimension_mismatch(
            what,
            source.dimensions(),
            other.dimensions(),
        ))
    }
}
