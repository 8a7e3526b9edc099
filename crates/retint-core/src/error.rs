//! Error type shared by every transformation.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageError {
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("pixel ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("reference image unavailable: {0}")]
    ResourceUnavailable(String),
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl ImageError {
    pub(crate) fn dimension_mismatch(what: &str, expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::InvalidDimensions(format!(
            "{what} is {}x{}, expected {}x{}",
            actual.0, actual.1, expected.0, expected.1
        ))
    }
}
