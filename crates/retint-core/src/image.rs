//! In-memory pixel grid consumed and produced by every transformation.

use std::fmt;

use crate::color::Rgb;
use crate::error::ImageError;

/// A non-empty, row-major grid of RGB pixels addressed by `(x, y)`.
///
/// Construction rejects zero width or height, so every grid holds at least
/// one pixel and every in-bounds coordinate maps to exactly one pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Allocate a grid filled with black.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Allocate a grid with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgb) -> Result<Self, ImageError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, ImageError> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(ImageError::InvalidDimensions(format!(
                "{width}x{height} grid needs {len} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid by evaluating `f(x, y)` at every coordinate.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgb,
    ) -> Result<Self, ImageError> {
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, always at least 1.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false` for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb, ImageError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, px: Rgb) -> Result<(), ImageError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = px;
        Ok(())
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable row-major pixel slice. The length cannot change, so the grid
    /// invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Consume the grid and return its row-major pixel buffer.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Replace every pixel with `f(pixel)`.
    pub fn map_pixels(&mut self, mut f: impl FnMut(Rgb) -> Rgb) {
        for px in &mut self.pixels {
            *px = f(*px);
        }
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, ImageError> {
        if x >= self.width || y >= self.height {
            return Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First eight pixels only.
        f.debug_struct("PixelGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &&self.pixels[..self.pixels.len().min(8)])
            .finish()
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions(format!(
            "{width}x{height} grid has no pixels"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| ImageError::InvalidDimensions(format!("{width}x{height} grid is too large")))
}
