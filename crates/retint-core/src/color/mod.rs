//! Color model — RGB pixels, HSL values, and the conversions between them.

pub mod hsl;
pub mod rgb;

pub use hsl::{Hsl, ROUND_TRIP_TOLERANCE};
pub use rgb::{Rgb, luminance};
