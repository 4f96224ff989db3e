//! Load-once scene plus the stateless per-frame entry point.
//!
//! Everything expensive (range analysis, raster synthesis, overlay culling)
//! happens in [`Scene::load`]. An external loop then calls
//! [`Scene::render_frame`] with the live viewport size each tick.

use field_common::{
    compute_bounds, BoundingBox, FeatureSource, GeoRect, GridField, GridSource, PolygonFeature,
    ScreenPoint, ScreenRect,
};
use image::RgbaImage;
use tracing::{debug, info};

use crate::colormap::ColormapKind;
use crate::config::ViewerConfig;
use crate::error::SceneError;
use crate::gradient::synthesize;
use crate::overlay::VectorOverlay;
use crate::range::{compute_display_range, DisplayRange};
use crate::target::RenderTarget;
use crate::viewport::{derive_transform, AffineMap2D};

/// Immutable products of one field load.
#[derive(Debug, Clone)]
pub struct Scene {
    grid: GridField,
    range: DisplayRange,
    colormap: ColormapKind,
    image: RgbaImage,
    bounds: GeoRect,
    view_rect: BoundingBox,
    overlay: VectorOverlay,
    background: [f32; 4],
}

/// What a single frame drew, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub dest: ScreenRect,
    pub transform: AffineMap2D,
    pub rings_drawn: usize,
}

impl Scene {
    /// Load the grid and features named by `config` and build the scene.
    pub fn load(
        config: &ViewerConfig,
        grids: &dyn GridSource,
        features: &dyn FeatureSource,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        let grid = grids.load_grid(&config.grid_path)?;
        let features = features.load_features(&config.features_path)?;
        Self::build(grid, features, config)
    }

    /// Build a scene from an already loaded grid and feature list.
    ///
    /// The grid is reoriented north-up first so that raster rows agree with
    /// the overlay's `y = -lat` convention.
    pub fn from_parts(
        grid: GridField,
        features: Vec<PolygonFeature>,
        config: &ViewerConfig,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        Self::build(grid, features, config)
    }

    fn build(
        grid: GridField,
        features: Vec<PolygonFeature>,
        config: &ViewerConfig,
    ) -> Result<Self, SceneError> {
        let grid = grid.north_up();

        let range = compute_display_range(&grid)?;
        info!(min = range.low, max = range.high, "pmsl display range (hPa)");

        let image = synthesize(&grid, &range, config.colormap);

        let bounds = compute_bounds(&grid)?;
        let view_rect = bounds.view_rect();
        debug!(
            lon_min = bounds.lon_min,
            lon_max = bounds.lon_max,
            lat_min = bounds.lat_min,
            lat_max = bounds.lat_max,
            "Grid bounds"
        );

        let overlay = VectorOverlay::new(features, &view_rect).with_style(config.overlay);
        info!(
            visible = overlay.visible_indices().len(),
            total = overlay.features().len(),
            "Overlay ready"
        );

        Ok(Self {
            grid,
            range,
            colormap: config.colormap,
            image,
            bounds,
            view_rect,
            overlay,
            background: config.background_rgba(),
        })
    }

    pub fn grid(&self) -> &GridField {
        &self.grid
    }

    pub fn range(&self) -> DisplayRange {
        self.range
    }

    pub fn colormap(&self) -> ColormapKind {
        self.colormap
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn bounds(&self) -> GeoRect {
        self.bounds
    }

    /// Data extent in overlay space (`x = lon`, `y = -lat`).
    pub fn view_rect(&self) -> BoundingBox {
        self.view_rect
    }

    pub fn overlay(&self) -> &VectorOverlay {
        &self.overlay
    }

    /// Largest rectangle with the grid's aspect ratio that fits the viewport,
    /// centered in it.
    pub fn dest_rect_for(&self, viewport_width: f64, viewport_height: f64) -> ScreenRect {
        let w = self.grid.width() as f64;
        let h = self.grid.height() as f64;
        let scale = (viewport_width / w).min(viewport_height / h);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 0.0 };

        let center = ScreenPoint::new(viewport_width * 0.5, viewport_height * 0.5);
        ScreenRect::centered(center, w * scale, h * scale)
    }

    pub fn transform_for(&self, dest: &ScreenRect) -> AffineMap2D {
        derive_transform(&self.view_rect, dest, self.grid.width(), self.grid.height())
    }

    /// Draw one frame: background, raster, then overlay.
    pub fn render_frame(
        &self,
        target: &mut dyn RenderTarget,
        viewport_width: f64,
        viewport_height: f64,
    ) -> FrameInfo {
        let dest = self.dest_rect_for(viewport_width, viewport_height);
        let transform = self.transform_for(&dest);

        target.clear(self.background);
        if !dest.is_empty() {
            target.draw_image(&self.image, &dest);
        }
        let rings_drawn = self.overlay.draw(target, &dest, &transform);

        debug!(
            dest_x = dest.x,
            dest_y = dest.y,
            dest_w = dest.width,
            dest_h = dest.height,
            rings = rings_drawn,
            "Rendered frame"
        );

        FrameInfo {
            dest,
            transform,
            rings_drawn,
        }
    }
}
