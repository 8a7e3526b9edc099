//! Reference images for the decorative filter, resolved from configuration.
//!
//! Each overlay is either a path or an encoded byte buffer. Locations come
//! from a JSON file, from environment variables, or from the defaults below
//! relative to the working directory:
//! ```json
//! { "halo": { "path": "resources/halo.png" },
//!   "grain": { "path": "resources/decorative_grain.png" } }
//! ```

use std::path::{Path, PathBuf};

use retint_core::{ImageError, PixelGrid, PreloadedReferences, ReferenceImages};
use serde::{Deserialize, Serialize};

use crate::codec::{decode_image, load_image};
use crate::error::IoError;

/// Environment variable overriding the halo overlay path.
pub const HALO_PATH_ENV: &str = "RETINT_HALO_PATH";
/// Environment variable overriding the grain overlay path.
pub const GRAIN_PATH_ENV: &str = "RETINT_GRAIN_PATH";
pub const DEFAULT_HALO_PATH: &str = "resources/halo.png";
pub const DEFAULT_GRAIN_PATH: &str = "resources/decorative_grain.png";

/// Where a reference image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSource {
    /// An image file on disk.
    Path(PathBuf),
    /// An encoded image (PNG, JPEG, ...) held in memory.
    Bytes(Vec<u8>),
}

impl AssetSource {
    pub fn load(&self) -> Result<PixelGrid, IoError> {
        match self {
            Self::Path(path) => load_image(path),
            Self::Bytes(bytes) => decode_image(bytes),
        }
    }

    /// Short description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Bytes(bytes) => format!("<{} bytes in memory>", bytes.len()),
        }
    }
}

/// Halo and grain overlay locations.
///
/// Implements [`ReferenceImages`] by loading on every request; call
/// [`ReferenceAssets::preload`] when filtering many images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAssets {
    pub halo: AssetSource,
    pub grain: AssetSource,
}

impl Default for ReferenceAssets {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ReferenceAssets {
    /// Read [`HALO_PATH_ENV`] and [`GRAIN_PATH_ENV`], falling back to the
    /// default paths.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve paths through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            AssetSource::Path(
                lookup(key)
                    .filter(|v| !v.is_empty())
                    .map_or_else(|| PathBuf::from(default), PathBuf::from),
            )
        };
        Self {
            halo: path(HALO_PATH_ENV, DEFAULT_HALO_PATH),
            grain: path(GRAIN_PATH_ENV, DEFAULT_GRAIN_PATH),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file. Relative asset paths are resolved against
    /// the file's directory.
    pub fn from_json_file(path: &Path) -> Result<Self, IoError> {
        let text = std::fs::read_to_string(path)?;
        let mut assets = Self::from_json_str(&text)?;
        if let Some(dir) = path.parent() {
            assets.halo = rebase(assets.halo, dir);
            assets.grain = rebase(assets.grain, dir);
        }
        Ok(assets)
    }

    /// Decode both overlays once.
    pub fn preload(&self) -> Result<PreloadedReferences, IoError> {
        Ok(PreloadedReferences {
            halo: self.halo.load()?,
            grain: self.grain.load()?,
        })
    }
}

impl ReferenceImages for ReferenceAssets {
    fn halo(&self) -> Result<PixelGrid, ImageError> {
        resolve("halo", &self.halo)
    }

    fn grain(&self) -> Result<PixelGrid, ImageError> {
        resolve("grain", &self.grain)
    }
}

fn resolve(name: &str, source: &AssetSource) -> Result<PixelGrid, ImageError> {
    source.load().map_err(|e| {
        tracing::warn!(asset = name, source = %source.describe(), "reference image unavailable: {e}");
        ImageError::ResourceUnavailable(format!("{name} image {}: {e}", source.describe()))
    })
}

fn rebase(source: AssetSource, dir: &Path) -> AssetSource {
    match source {
        AssetSource::Path(p) if p.is_relative() => AssetSource::Path(dir.join(p)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_defaults() {
        let assets = ReferenceAssets::from_lookup(|_| None);
        assert_eq!(assets.halo, AssetSource::Path(DEFAULT_HALO_PATH.into()));
        assert_eq!(assets.grain, AssetSource::Path(DEFAULT_GRAIN_PATH.into()));
    }

    #[test]
    fn test_lookup_overrides() {
        let assets = ReferenceAssets::from_lookup(|key| match key {
            HALO_PATH_ENV => Some("/opt/assets/halo.png".into()),
            GRAIN_PATH_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(assets.halo, AssetSource::Path("/opt/assets/halo.png".into()));
        // Empty values fall back to the default.
        assert_eq!(assets.grain, AssetSource::Path(DEFAULT_GRAIN_PATH.into()));
    }

    #[test]
    fn test_json_config() {
        let assets = ReferenceAssets::from_json_str(
            r#"{ "halo": { "path": "a/halo.png" }, "grain": { "bytes": [1, 2, 3] } }"#,
        )
        .unwrap();
        assert_eq!(assets.halo, AssetSource::Path("a/halo.png".into()));
        assert_eq!(assets.grain, AssetSource::Bytes(vec![1, 2, 3]));
    }

    #[test]
    fn test_json_config_missing_field() {
        let err = ReferenceAssets::from_json_str(r#"{ "halo": { "path": "x.png" } }"#).unwrap_err();
        assert!(matches!(err, IoError::Config(_)));
    }

    #[test]
    fn test_rebase_only_relative() {
        let dir = Path::new("/etc/retint");
        assert_eq!(
            rebase(AssetSource::Path("halo.png".into()), dir),
            AssetSource::Path("/etc/retint/halo.png".into())
        );
        assert_eq!(
            rebase(AssetSource::Bytes(vec![9]), dir),
            AssetSource::Bytes(vec![9])
        );
    }

    #[test]
    fn test_undecodable_bytes_are_resource_errors() {
        let assets = ReferenceAssets {
            halo: AssetSource::Bytes(vec![0, 1, 2]),
            grain: AssetSource::Bytes(vec![]),
        };
        assert!(matches!(assets.halo(), Err(ImageError::ResourceUnavailable(_))));
        assert!(matches!(assets.grain(), Err(ImageError::ResourceUnavailable(_))));
    }
}
