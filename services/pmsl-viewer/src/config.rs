//! Command-line arguments and their merge onto the viewer configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use netcdf_parser::VariableNames;
use renderer::{ColormapKind, ViewerConfig};

/// Sea-level pressure viewer
#[derive(Parser, Debug)]
#[command(name = "pmsl-viewer")]
#[command(about = "Render a sea-level pressure field with a coastline overlay")]
pub struct Args {
    /// YAML or JSON configuration file
    #[arg(short, long, env = "PMSL_CONFIG")]
    pub config: Option<PathBuf>,

    /// NetCDF pressure file (overrides the config)
    #[arg(long, env = "PMSL_GRID")]
    pub grid: Option<PathBuf>,

    /// GeoJSON overlay file (overrides the config)
    #[arg(long, env = "PMSL_FEATURES")]
    pub features: Option<PathBuf>,

    /// Color ramp: turbo, viridis, pressure or grayscale
    #[arg(long, env = "PMSL_COLORMAP")]
    pub colormap: Option<ColormapKind>,

    /// Name of the pressure variable in the NetCDF file
    #[arg(long, default_value = "msl", env = "PMSL_VARIABLE")]
    pub variable: String,

    /// Viewport width in device pixels
    #[arg(long, default_value_t = 600, env = "PMSL_WIDTH")]
    pub width: u32,

    /// Viewport height in device pixels
    #[arg(long, default_value_t = 600, env = "PMSL_HEIGHT")]
    pub height: u32,

    /// Device zoom factor
    #[arg(long, default_value_t = 1.0, env = "PMSL_ZOOM")]
    pub zoom: f64,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "PMSL_LOG_JSON")]
    pub log_json: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ViewerConfig::default(),
        };

        if let Some(grid) = &self.grid {
            config.grid_path = grid.clone();
        }
        if let Some(features) = &self.features {
            config.features_path = features.clone();
        }
        if let Some(colormap) = self.colormap {
            config.colormap = colormap;
        }

        Ok(config)
    }

    pub fn variable_names(&self) -> VariableNames {
        VariableNames {
            field: self.variable.clone(),
            ..VariableNames::default()
        }
    }
}
