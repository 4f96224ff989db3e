//! Sea-level pressure viewer.
//!
//! Loads a NetCDF pressure field and a GeoJSON coastline set, builds the
//! scene once, then renders a frame into an offscreen surface and reports
//! what was drawn. Windowing is left to whatever drives `Scene::render_frame`.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use field_common::ScreenPoint;
use geojson_parser::GeoJsonFeatureSource;
use netcdf_parser::{NetCdfGridSource, PA_TO_HPA};
use renderer::{PixmapTarget, Scene};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Args;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    let config = args.viewer_config()?;
    info!(
        grid = %config.grid_path.display(),
        features = %config.features_path.display(),
        colormap = %config.colormap,
        "Starting pmsl viewer"
    );

    let grids = NetCdfGridSource {
        names: args.variable_names(),
        unit_scale: PA_TO_HPA,
    };

    let scene = Scene::load(&config, &grids, &GeoJsonFeatureSource)
        .context("Failed to load scene")?;

    let mut target = PixmapTarget::new(args.width, args.height)
        .context("Failed to create render surface")?
        .with_view(args.zoom, ScreenPoint::new(0.0, 0.0));
    let (viewport_w, viewport_h) = target.logical_size();

    let frame = scene.render_frame(&mut target, viewport_w, viewport_h);

    let range = scene.range();
    info!(
        pmsl_min = range.low,
        pmsl_max = range.high,
        grid_width = scene.grid().width(),
        grid_height = scene.grid().height(),
        "Field summary"
    );
    info!(
        dest_x = frame.dest.x,
        dest_y = frame.dest.y,
        dest_w = frame.dest.width,
        dest_h = frame.dest.height,
        scale_x = frame.transform.scale_x,
        scale_y = frame.transform.scale_y,
        rings = frame.rings_drawn,
        visible_features = scene.overlay().visible_indices().len(),
        zoom = target.zoom(),
        "Rendered frame"
    );

    Ok(())
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt().with_env_filter(filter).with_target(true).with_level(true);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
