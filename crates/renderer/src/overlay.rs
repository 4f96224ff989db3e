//! Coastline and border overlay drawn on top of the pressure raster.

use field_common::{BoundingBox, PolygonFeature, ScreenPoint, ScreenRect};
use tracing::debug;

use crate::config::OverlayStyle;
use crate::target::{RenderTarget, StrokeStyle};
use crate::viewport::AffineMap2D;

/// Polygon features culled once against a fixed view extent.
#[derive(Debug, Clone)]
pub struct VectorOverlay {
    features: Vec<PolygonFeature>,
    visible: Vec<usize>,
    style: OverlayStyle,
}

impl VectorOverlay {
    /// Keep every feature but remember only those whose bounding box touches
    /// `visible_rect`. Features without vertices are never visible.
    pub fn new(features: Vec<PolygonFeature>, visible_rect: &BoundingBox) -> Self {
        let visible: Vec<usize> = features
            .iter()
            .enumerate()
            .filter(|(_, f)| f.bbox().is_some_and(|b| b.intersects(visible_rect)))
            .map(|(i, _)| i)
            .collect();

        debug!(
            total = features.len(),
            visible = visible.len(),
            "Culled overlay features"
        );

        Self {
            features,
            visible,
            style: OverlayStyle::default(),
        }
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn features(&self) -> &[PolygonFeature] {
        &self.features
    }

    /// Indices into [`features`](Self::features) that survived culling.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_features(&self) -> impl Iterator<Item = &PolygonFeature> {
        self.visible.iter().map(|&i| &self.features[i])
    }

    /// Stroke width that renders as `line_width` device pixels on `target`.
    pub fn stroke_style_for(&self, target: &dyn RenderTarget) -> StrokeStyle {
        let scaling = target.max_scaling();
        let width = if scaling.is_finite() && scaling > 0.0 {
            self.style.line_width / scaling
        } else {
            self.style.line_width
        };
        StrokeStyle {
            width,
            color: self.style.color,
        }
    }

    /// Stroke every ring of every visible feature through `transform`.
    ///
    /// Returns the number of rings stroked.
    pub fn draw(
        &self,
        target: &mut dyn RenderTarget,
        dest: &ScreenRect,
        transform: &AffineMap2D,
    ) -> usize {
        if dest.is_empty() || self.visible.is_empty() {
            return 0;
        }

        let style = self.stroke_style_for(target);
        let mut points: Vec<ScreenPoint> = Vec::new();
        let mut rings = 0;

        for feature in self.visible_features() {
            for ring in feature.polygons().iter().flat_map(|p| p.rings()) {
                points.clear();
                points.extend(ring.iter().map(|&p| transform.apply(p)));
                target.stroke_polyline(&points, true, &style);
                rings += 1;
            }
        }

        rings
    }
}
