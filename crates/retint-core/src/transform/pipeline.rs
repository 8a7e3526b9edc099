//! Serializable description of a transformation chain.
//!
//! `Operation` names every transformation with its parameters, so a chain
//! can be stored as JSON and replayed against any image:
//! ```json
//! [{ "op": "sepia" }, { "op": "set_hue", "hue": 200.0 }, { "op": "rotate" }]
//! ```

use serde::{Deserialize, Serialize};

use super::{filter, geometry, hsl_adjust, threshold, tone};
use crate::error::ImageError;
use crate::image::PixelGrid;

/// A single named transformation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    Invert,
    Sepia,
    StylizeBw,
    /// 90° clockwise.
    Rotate,
    SetHue { hue: f64 },
    SetSaturation { saturation: f64 },
    SetLightness { lightness: f64 },
    /// Warm tone, vignette and grain. Needs reference images.
    DecorativeFilter,
}

impl Operation {
    /// Human-readable label for logs and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::StylizeBw => "stylize black/white",
            Self::Rotate => "rotate 90° clockwise",
            Self::SetHue { .. } => "set hue",
            Self::SetSaturation { .. } => "set saturation",
            Self::SetLightness { .. } => "set lightness",
            Self::DecorativeFilter => "decorative filter",
        }
    }

    /// Parse a JSON array of operations.
    pub fn chain_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply this operation, consuming the input grid.
    ///
    /// `references` is only consulted by [`Operation::DecorativeFilter`].
    pub fn apply<R>(&self, mut image: PixelGrid, references: &R) -> Result<PixelGrid, ImageError>
    where
        R: filter::ReferenceImages + ?Sized,
    {
        match *self {
            Self::Grayscale => tone::grayscale(&mut image),
            Self::Invert => tone::invert(&mut image),
            Self::Sepia => tone::sepia(&mut image),
            Self::StylizeBw => threshold::stylize_bw(&mut image),
            Self::Rotate => return geometry::rotate_clockwise(&image),
            Self::SetHue { hue } => hsl_adjust::set_hue(&mut image, hue)?,
            Self::SetSaturation { saturation } => {
                hsl_adjust::set_saturation(&mut image, saturation)?
            }
            Self::SetLightness { lightness } => hsl_adjust::set_lightness(&mut image, lightness)?,
            Self::DecorativeFilter => filter::decorative_filter(&mut image, references)?,
        }
        Ok(image)
    }
}

/// Run `ops` in order, feeding each result into the next.
pub fn apply_chain<R>(
    image: PixelGrid,
    ops: &[Operation],
    references: &R,
) -> Result<PixelGrid, ImageError>
where
    R: filter::ReferenceImages + ?Sized,
{
    ops.iter().try_fold(image, |image, op| {
        tracing::debug!(op = op.label(), "applying operation");
        op.apply(image, references)
    })
}
