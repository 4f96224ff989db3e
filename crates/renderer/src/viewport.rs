//! Geographic to screen transform with pixel-center alignment.
//!
//! The raster is drawn as a texture stretched over the destination rectangle,
//! so grid cell `(c, r)` occupies destination pixel `(c, r)`. The overlay has
//! to land on the *centers* of those pixels, which is why the geographic span
//! is mapped onto `dest.size - pixel_size` and then shifted by half a pixel.

use field_common::{BoundingBox, GeoPoint, ScreenPoint, ScreenRect};

/// Axis-aligned affine map: `screen = geo * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap2D {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl AffineMap2D {
    pub fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Every point maps onto `anchor`.
    pub fn collapsed(anchor: ScreenPoint) -> Self {
        Self::new(0.0, 0.0, anchor.x, anchor.y)
    }

    pub fn apply(&self, point: GeoPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x * self.scale_x + self.translate_x,
            point.y * self.scale_y + self.translate_y,
        )
    }

    /// True when both axes have zero scale.
    pub fn is_collapsed(&self) -> bool {
        self.scale_x == 0.0 && self.scale_y == 0.0
    }

    /// Same map as a tiny-skia transform.
    pub fn to_skia(&self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(
            self.scale_x as f32,
            0.0,
            0.0,
            self.scale_y as f32,
            self.translate_x as f32,
            self.translate_y as f32,
        )
    }
}

/// Derive the map from `view` (lon, -lat) into `dest` for a grid of
/// `grid_width x grid_height` cells.
///
/// The center of the cell at the view's `(min_x, min_y)` corner lands on the
/// center of the top-left destination pixel; the opposite corner cell lands
/// on the bottom-right pixel center.
///
/// An empty destination or a zero grid dimension collapses onto the
/// destination origin. A zero or non-finite geographic span gives scale 0 on
/// that axis, placing everything on the first pixel center.
pub fn derive_transform(
    view: &BoundingBox,
    dest: &ScreenRect,
    grid_width: usize,
    grid_height: usize,
) -> AffineMap2D {
    if dest.is_empty() || grid_width == 0 || grid_height == 0 {
        let anchor = if dest.x.is_finite() && dest.y.is_finite() {
            dest.origin()
        } else {
            ScreenPoint::new(0.0, 0.0)
        };
        return AffineMap2D::collapsed(anchor);
    }

    let pixel_w = dest.width / grid_width as f64;
    let pixel_h = dest.height / grid_height as f64;

    let scale_x = axis_scale(dest.width - pixel_w, view.width());
    let scale_y = axis_scale(dest.height - pixel_h, view.height());

    let translate_x = axis_translate(dest.x + pixel_w * 0.5, view.min_x, scale_x);
    let translate_y = axis_translate(dest.y + pixel_h * 0.5, view.min_y, scale_y);

    AffineMap2D::new(scale_x, scale_y, translate_x, translate_y)
}

fn axis_scale(screen_span: f64, geo_span: f64) -> f64 {
    let scale = screen_span / geo_span;
    if geo_span == 0.0 || !scale.is_finite() {
        0.0
    } else {
        scale
    }
}

fn axis_translate(first_center: f64, geo_min: f64, scale: f64) -> f64 {
    if scale == 0.0 || !geo_min.is_finite() {
        first_center
    } else {
        first_center - geo_min * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_map() {
        let map = AffineMap2D::collapsed(ScreenPoint::new(4.0, 9.0));
        assert!(map.is_collapsed());
        assert_eq!(map.apply(GeoPoint::new(-170.0, 80.0)), ScreenPoint::new(4.0, 9.0));
    }

    #[test]
    fn test_to_skia_matches_apply() {
        let map = AffineMap2D::new(2.0, -3.0, 10.0, 20.0);
        let t = map.to_skia();
        let mut pts = [tiny_skia::Point::from_xy(1.5, 4.0)];
        t.map_points(&mut pts);
        let expected = map.apply(GeoPoint::new(1.5, 4.0));
        assert!((pts[0].x as f64 - expected.x).abs() < 1e-4);
        assert!((pts[0].y as f64 - expected.y).abs() < 1e-4);
    }

    #[test]
    fn test_zero_grid_dimension_collapses() {
        let view = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let dest = ScreenRect::new(3.0, 5.0, 100.0, 100.0);
        let map = derive_transform(&view, &dest, 0, 2);
        assert!(map.is_collapsed());
        assert_eq!(map.apply(GeoPoint::new(1.0, 1.0)), ScreenPoint::new(3.0, 5.0));
    }
}
