//! HSL representation and RGB ↔ HSL conversion.
//!
//! # Algorithm
//! RGB → HSL normalizes channels to `[0, 1]` and uses the standard
//! max/min formulation:
//! ```text
//! L = (max + min) / 2
//! S = 0                                  if max == min
//!     (max − min) / (max + min)          if L ≤ 0.5
//!     (max − min) / (2 − max − min)      otherwise
//! H = 60 × ((g − b)/d mod 6)             if max == r
//!     60 × ((b − r)/d + 2)               if max == g
//!     60 × ((r − g)/d + 4)               if max == b
//! ```
//! HSL → RGB goes through chroma `C = (1 − |2L − 1|) × S` and the hue sector,
//! then rounds each channel to the nearest integer.
//!
//! # Value policy
//! Hue wraps modulo 360, saturation and lightness clamp to `[0, 1]`, and
//! non-finite inputs are rejected with [`ImageError::InvalidParameter`].

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;
use crate::error::ImageError;

/// Maximum per-channel difference after `Rgb → Hsl → Rgb`.
pub const ROUND_TRIP_TOLERANCE: u8 = 1;

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
///
/// Fields are private so every value satisfies the range policy; use
/// [`Hsl::new`] or the `with_*` setters to build one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHsl")]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// Build an HSL value, wrapping hue and clamping saturation/lightness.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ImageError> {
        Ok(Self {
            hue: wrap_hue(hue)?,
            saturation: clamp_unit("saturation", saturation)?,
            lightness: clamp_unit("lightness", lightness)?,
        })
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Replace the hue. Values outside `[0, 360)` wrap around.
    pub fn with_hue(self, hue: f64) -> Result<Self, ImageError> {
        Ok(Self {
            hue: wrap_hue(hue)?,
            ..self
        })
    }

    /// Replace the saturation, clamped to `[0, 1]`.
    pub fn with_saturation(self, saturation: f64) -> Result<Self, ImageError> {
        Ok(Self {
            saturation: clamp_unit("saturation", saturation)?,
            ..self
        })
    }

    /// Replace the lightness, clamped to `[0, 1]`.
    pub fn with_lightness(self, lightness: f64) -> Result<Self, ImageError> {
        Ok(Self {
            lightness: clamp_unit("lightness", lightness)?,
            ..self
        })
    }

    /// Convert back to 8-bit RGB, rounding to the nearest integer.
    pub fn to_rgb(self) -> Rgb {
        let Self {
            hue,
            saturation,
            lightness,
        } = self;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
    }
}

impl Rgb {
    /// Convert to HSL. Achromatic pixels get hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.red) / 255.0;
        let g = f64::from(self.green) / 255.0;
        let b = f64::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        // Channels come from u8, so equality is exact here.
        if max == min {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let d = max - min;
        let saturation = if lightness <= 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };

        let sector = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            hue: wrap_degrees(sector * 60.0),
            saturation: saturation.clamp(0.0, 1.0),
            lightness,
        }
    }
}

/// Unchecked wire form; deserialization goes through [`Hsl::new`].
#[derive(Deserialize)]
struct RawHsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl TryFrom<RawHsl> for Hsl {
    type Error = ImageError;

    fn try_from(raw: RawHsl) -> Result<Self, Self::Error> {
        Self::new(raw.hue, raw.saturation, raw.lightness)
    }
}

impl From<Rgb> for Hsl {
    fn from(px: Rgb) -> Self {
        px.to_hsl()
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// Validate a hue and wrap it into `[0, 360)`.
pub(crate) fn wrap_hue(hue: f64) -> Result<f64, ImageError> {
    if !hue.is_finite() {
        return Err(ImageError::InvalidParameter {
            name: "hue",
            value: hue,
        });
    }
    Ok(wrap_degrees(hue))
}

/// Validate a saturation/lightness value and clamp it into `[0, 1]`.
pub(crate) fn clamp_unit(name: &'static str, value: f64) -> Result<f64, ImageError> {
    if !value.is_finite() {
        return Err(ImageError::InvalidParameter { name, value });
    }
    Ok(value.clamp(0.0, 1.0))
}

fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
