//! Tests for overlay culling and stroking.

use field_common::{BoundingBox, Polygon, PolygonFeature, ScreenPoint, ScreenRect};
use renderer::config::OverlayStyle;
use renderer::overlay::VectorOverlay;
use renderer::target::{DrawCall, PixmapTarget, RecordingTarget, RenderTarget};
use renderer::viewport::{derive_transform, AffineMap2D};
use test_utils::{features, geojson};

fn view() -> BoundingBox {
    // lon 0..10, lat 0..10 in (lon, -lat) space
    BoundingBox::new(0.0, -10.0, 10.0, 0.0)
}

fn square_overlay(x0: f64, y0: f64, size: f64) -> VectorOverlay {
    VectorOverlay::new(vec![features::square_feature("sq", x0, y0, size)], &view())
}

// ============================================================================
// Culling
// ============================================================================

#[test]
fn test_outside_feature_never_visible() {
    let overlay = VectorOverlay::new(
        vec![
            features::square_feature("far east", 20.0, -5.0, 2.0),
            features::square_feature("far south", 2.0, 5.0, 2.0),
        ],
        &view(),
    );
    assert!(overlay.visible_indices().is_empty());
    assert_eq!(overlay.features().len(), 2);
}

#[test]
fn test_partial_overlap_is_visible() {
    let overlay = VectorOverlay::new(
        vec![
            features::square_feature("outside", 11.0, -5.0, 1.0),
            features::square_feature("straddling", 9.0, -5.0, 2.0),
            features::square_feature("inside", 4.0, -6.0, 1.0),
        ],
        &view(),
    );
    assert_eq!(overlay.visible_indices(), &[1, 2]);
    let names: Vec<_> = overlay.visible_features().filter_map(|f| f.name()).collect();
    assert_eq!(names, vec!["straddling", "inside"]);
}

#[test]
fn test_touching_edge_counts_as_visible() {
    let overlay = VectorOverlay::new(
        vec![features::square_feature("neighbor", 10.0, -3.0, 1.0)],
        &view(),
    );
    assert_eq!(overlay.visible_indices(), &[0]);
}

#[test]
fn test_feature_without_vertices_is_skipped() {
    let empty = PolygonFeature::new(Some("ghost".to_string()), vec![]);
    let overlay = VectorOverlay::new(vec![empty], &view());
    assert!(overlay.visible_indices().is_empty());
}

#[test]
fn test_culls_geojson_features() {
    let features = geojson_parser::parse_features(geojson::TWO_COUNTRIES).unwrap();
    // Japan-ish extent: lon 120..150, lat 20..50
    let overlay = VectorOverlay::new(features, &BoundingBox::new(120.0, -50.0, 150.0, -20.0));
    let names: Vec<_> = overlay.visible_features().filter_map(|f| f.name()).collect();
    assert_eq!(names, vec!["Inside"]);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_draw_transforms_and_closes_rings() {
    let overlay = square_overlay(0.0, -10.0, 10.0);
    let dest = ScreenRect::new(0.0, 0.0, 110.0, 110.0);
    let transform = derive_transform(&view(), &dest, 11, 11);

    let mut target = RecordingTarget::new(1.0);
    let rings = overlay.draw(&mut target, &dest, &transform);
    assert_eq!(rings, 1);

    let (points, closed, _) = target.polylines().next().unwrap();
    assert!(closed);
    assert_eq!(points.len(), 5);
    // Corners land on the centers of the corner pixels
    assert_eq!(points[0], ScreenPoint::new(5.0, 5.0));
    assert_eq!(points[1], ScreenPoint::new(105.0, 5.0));
    assert_eq!(points[2], ScreenPoint::new(105.0, 105.0));
}

#[test]
fn test_holes_are_stroked() {
    let outer = features::square_ring(1.0, -9.0, 8.0);
    let hole = features::square_ring(4.0, -6.0, 2.0);
    let feature = PolygonFeature::new(None, vec![Polygon::new(outer, vec![hole])]);
    let overlay = VectorOverlay::new(vec![feature], &view());

    let dest = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
    let mut target = RecordingTarget::new(1.0);
    let rings = overlay.draw(&mut target, &dest, &AffineMap2D::new(10.0, 10.0, 0.0, 100.0));
    assert_eq!(rings, 2);
    assert_eq!(target.polylines().count(), 2);
}

#[test]
fn test_line_width_constant_in_screen_pixels() {
    let style = OverlayStyle {
        line_width: 1.5,
        color: [0.1, 0.1, 0.1, 0.85],
    };
    let overlay = square_overlay(2.0, -8.0, 4.0).with_style(style);
    let dest = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
    let transform = derive_transform(&view(), &dest, 10, 10);

    for zoom in [0.25, 1.0, 2.0, 8.0] {
        let mut target = RecordingTarget::new(zoom);
        overlay.draw(&mut target, &dest, &transform);
        let (_, _, stroke) = target.polylines().next().unwrap();
        // Width times the target's own scaling is always the configured width
        assert!((stroke.width * zoom - 1.5).abs() < 1e-12, "zoom {}", zoom);
        assert_eq!(stroke.color, style.color);
    }
}

#[test]
fn test_empty_sets_draw_nothing() {
    let dest = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
    let transform = derive_transform(&view(), &dest, 10, 10);
    let mut target = RecordingTarget::new(1.0);

    let empty = VectorOverlay::new(vec![], &view());
    assert_eq!(empty.draw(&mut target, &dest, &transform), 0);

    let culled = square_overlay(50.0, 50.0, 1.0);
    assert_eq!(culled.draw(&mut target, &dest, &transform), 0);

    assert!(target.calls.is_empty());
}

#[test]
fn test_zero_area_destination_draws_nothing() {
    let overlay = square_overlay(2.0, -8.0, 4.0);
    let dest = ScreenRect::new(50.0, 50.0, 0.0, 0.0);
    let transform = derive_transform(&view(), &dest, 10, 10);
    let mut target = RecordingTarget::new(1.0);

    assert_eq!(overlay.draw(&mut target, &dest, &transform), 0);
    assert!(target.calls.is_empty());
}

#[test]
fn test_strokes_reach_pixmap() {
    let style = OverlayStyle {
        line_width: 2.0,
        color: [1.0, 0.0, 0.0, 1.0],
    };
    let overlay = square_overlay(0.0, -10.0, 10.0).with_style(style);
    let dest = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
    let transform = derive_transform(&view(), &dest, 10, 10);

    let mut target = PixmapTarget::new(100, 100).unwrap();
    target.clear([0.0, 0.0, 0.0, 1.0]);
    overlay.draw(&mut target, &dest, &transform);

    // Left edge of the square runs along x = 5 (first pixel center)
    let on_edge = target.pixel(5, 50).unwrap();
    assert!(on_edge[0] > 200, "{:?}", on_edge);
    let interior = target.pixel(50, 50).unwrap();
    assert_eq!(interior, [0, 0, 0, 255]);
}

#[test]
fn test_recording_target_sees_only_polylines() {
    let overlay = square_overlay(1.0, -9.0, 1.0);
    let dest = ScreenRect::new(0.0, 0.0, 10.0, 10.0);
    let mut target = RecordingTarget::new(1.0);
    overlay.draw(&mut target, &dest, &derive_transform(&view(), &dest, 10, 10));

    assert!(target
        .calls
        .iter()
        .all(|call| matches!(call, DrawCall::Polyline { .. })));
}
