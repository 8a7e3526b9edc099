//! Transformation library — tone, threshold, geometry, HSL and composite
//! filter operations, plus a serializable operation chain.

pub mod filter;
pub mod geometry;
pub mod hsl_adjust;
pub mod pipeline;
pub mod threshold;
pub mod tone;

pub use filter::decorative_filter;
pub use geometry::rotate_clockwise;
pub use hsl_adjust::{set_hue, set_lightness, set_saturation};
pub use threshold::stylize_bw;
pub use tone::{grayscale, invert, sepia};
