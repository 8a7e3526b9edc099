//! Stylized black/white thresholding around the median luminance.
//!
//! # Algorithm
//! 1. Compute `luminance = sqrt(0.299 r² + 0.587 g² + 0.114 b²)` per pixel
//! 2. Sort the luminances and pick index `floor(0.5 + n / 2)`, clamped to
//!    `n − 1`. For even `n` this is the upper-middle element; for odd `n`
//!    it is one past the middle.
//! 3. Pixels with luminance ≥ that value become white, the rest black
//!
//! # Complexity
//! O(N log N) for the sort, two full passes over the grid.

use crate::color::{Rgb, luminance};
use crate::image::PixelGrid;

/// Threshold luminance used by [`stylize_bw`].
pub fn median_luminance(image: &PixelGrid) -> f64 {
    let mut lums: Vec<f64> = image.pixels().iter().map(|&px| luminance(px)).collect();
    lums.sort_by(f64::total_cmp);
    lums[median_index(lums.len())]
}

/// Turn every pixel pure white or pure black around the median luminance.
pub fn stylize_bw(image: &mut PixelGrid) {
    let median = median_luminance(image);
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        median,
        "stylize black/white"
    );
    image.map_pixels(|px| {
        if luminance(px) >= median {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    });
}

/// Index of the threshold element in a sorted sequence of `n ≥ 1` values.
fn median_index(n: usize) -> usize {
    let idx = (0.5 + n as f64 / 2.0) as usize;
    idx.min(n - 1)
}
