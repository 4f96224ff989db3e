//! Error types for the rendering pipeline.

use field_common::{DataSourceError, InvalidInputError};
use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Failures creating or feeding a render surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid render surface size {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("Image of {width}x{height} cannot be uploaded as a texture")]
    InvalidImage { width: u32, height: u32 },
}

/// Failures loading a [`ViewerConfig`](crate::config::ViewerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Everything that can stop a scene from loading.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
