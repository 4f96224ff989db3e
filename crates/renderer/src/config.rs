//! Viewer configuration loaded from YAML or JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colormap::ColormapKind;
use crate::error::ConfigError;

/// Everything the pipeline needs to know before loading a scene.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// NetCDF file holding the pressure field.
    pub grid_path: PathBuf,
    /// GeoJSON file holding country/coastline polygons.
    pub features_path: PathBuf,
    pub colormap: ColormapKind,
    pub overlay: OverlayStyle,
    /// Opaque RGB clear color behind the raster.
    pub background: [f32; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid_path: PathBuf::from("pmsl.nc"),
            features_path: PathBuf::from("countries.geojson"),
            colormap: ColormapKind::default(),
            overlay: OverlayStyle::default(),
            background: [0.2, 0.3, 0.4],
        }
    }
}

/// Overlay outline appearance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Outline width in device pixels, independent of zoom.
    pub line_width: f64,
    /// Straight-alpha RGBA, each channel in `[0, 1]`.
    pub color: [f32; 4],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: [0.1, 0.1, 0.1, 0.85],
        }
    }
}

impl ViewerConfig {
    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, picking the format by extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml(&std::fs::read_to_string(path)?),
            "json" => Self::from_json(&std::fs::read_to_string(path)?),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.overlay.line_width;
        if !width.is_finite() || width < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "overlay.line_width",
                reason: format!("must be a finite non-negative number, got {}", width),
            });
        }
        let mut channels = self.overlay.color.iter().chain(&self.background);
        if channels.any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::InvalidValue {
                field: "color",
                reason: "color channels must lie in [0, 1]".to_string(),
            });
        }
        Ok(())
    }

    /// Background as an opaque RGBA color.
    pub fn background_rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.background;
        [r, g, b, 1.0]
    }
}
