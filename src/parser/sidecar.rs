//! Sidecar color descriptors
//!
//! A logo `logos/acme.png` may be accompanied by `logos/acme.color.json` holding
//! either explicit colors or a single hex color:
//!
//! ```json
//! { "primary": [27, 94, 32], "accent": [76, 175, 80] }
//! { "color": "#1B5E20" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::{Color, Palette};

#[derive(Debug, Deserialize)]
struct RawSidecar {
    primary: Option<Vec<i64>>,
    accent: Option<Vec<i64>>,
    color: Option<String>,
}

/// A parsed sidecar file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidecarDescriptor {
    /// Both colors given explicitly
    Explicit(Palette),
    /// A single color; the accent is derived from it
    Single(Color),
}

impl SidecarDescriptor {
    pub fn palette(&self) -> Palette {
        match *self {
            SidecarDescriptor::Explicit(palette) => palette,
            SidecarDescriptor::Single(color) => Palette::from_primary(color),
        }
    }

    /// Parse the JSON contents of a sidecar file
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSidecar = serde_json::from_str(json)
            .map_err(|e| ConfigError::InvalidSidecar(e.to_string()))?;

        if let (Some(primary), Some(accent)) = (&raw.primary, &raw.accent) {
            if let (Some(primary), Some(accent)) =
                (Color::from_channels(primary), Color::from_channels(accent))
            {
                return Ok(SidecarDescriptor::Explicit(Palette::new(primary, accent)));
            }
        }

        match raw.color {
            Some(hex) => Color::from_hex(&hex)
                .map(SidecarDescriptor::Single)
                .ok_or(ConfigError::InvalidColor(hex)),
            None => Err(ConfigError::InvalidSidecar(
                "expected primary/accent arrays or a color string".to_string(),
            )),
        }
    }

    /// Path of the sidecar belonging to a logo: same directory, extension
    /// replaced by `.color.json`
    pub fn sidecar_path(logo_path: &Path) -> PathBuf {
        let stem = logo_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        logo_path.with_file_name(format!("{}.color.json", stem))
    }

    /// Load the sidecar next to a logo. Missing or unusable files yield `None`.
    pub fn load_for_logo(logo_path: &Path) -> Option<Self> {
        let path = Self::sidecar_path(logo_path);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Cannot read color sidecar {}: {}", path.display(), e);
                return None;
            }
        };

        match Self::parse(&contents) {
            Ok(descriptor) => {
                log::debug!("Loaded color sidecar {}", path.display());
                Some(descriptor)
            }
            Err(e) => {
                log::warn!("Ignoring color sidecar {}: {}", path.display(), e);
                None
            }
        }
    }
}
