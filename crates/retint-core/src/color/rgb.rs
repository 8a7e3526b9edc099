//! 8-bit RGB pixel value.

use serde::{Deserialize, Serialize};

/// Luminance weights applied to the squared channels.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// A single pixel with red, green and blue channels in `[0, 255]`.
///
/// Channels are stored as `u8`, so the range clamp is carried by the type.
/// Every transformation produces new values rather than mutating a shared
/// pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::gray(0);
    pub const WHITE: Self = Self::gray(255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// A pixel with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Build a pixel from float channels, truncating toward zero and
    /// clamping each result to `[0, 255]`.
    ///
    /// NaN maps to 0.
    pub fn from_truncated(red: f64, green: f64, blue: f64) -> Self {
        Self::new(truncate(red), truncate(green), truncate(blue))
    }

    /// Channels in `[red, green, blue]` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Apply `f` to every channel.
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    /// `true` when red, green and blue are equal.
    pub const fn is_gray(self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(px: Rgb) -> Self {
        px.channels()
    }
}

/// Perceptual brightness of a pixel.
///
/// ```text
/// luminance = sqrt(0.299 r² + 0.587 g² + 0.114 b²)
/// ```
///
/// Operates on the raw 0–255 channel values, so the result lies in `[0, 255]`.
pub fn luminance(px: Rgb) -> f64 {
    px.channels()
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(&c, w)| w * f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}

fn truncate(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.trunc().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_truncated_drops_fraction() {
        assert_eq!(Rgb::from_truncated(10.99, 0.5, 254.999), Rgb::new(10, 0, 254));
    }

    #[test]
    fn test_from_truncated_clamps_range() {
        assert_eq!(Rgb::from_truncated(300.0, -12.0, f64::NAN), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(Rgb::BLACK), 0.0);
        // Weights sum to 1.0, so white maps to 255.
        assert!((luminance(Rgb::WHITE) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_weights_green_highest() {
        let red = luminance(Rgb::new(200, 0, 0));
        let green = luminance(Rgb::new(0, 200, 0));
        let blue = luminance(Rgb::new(0, 0, 200));
        assert!(green > red && red > blue);
    }

    #[test]
    fn test_is_gray() {
        assert!(Rgb::gray(17).is_gray());
        assert!(!Rgb::new(1, 2, 1).is_gray());
    }
}
