//! Tests for the pixel-center aligned viewport transform.

use field_common::{compute_bounds, BoundingBox, GeoPoint, GridField, ScreenPoint, ScreenRect};
use renderer::viewport::{derive_transform, AffineMap2D};
use test_utils::{assert_point_near, grids};

fn apply(map: &AffineMap2D, x: f64, y: f64) -> (f64, f64) {
    let p = map.apply(GeoPoint::new(x, y));
    (p.x, p.y)
}

fn assert_near(actual: (f64, f64), expected: (f64, f64)) {
    let point = ScreenPoint::new(actual.0, actual.1);
    assert_point_near!(point, (expected.0, expected.1), 1e-9);
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn test_two_by_two_cell_centers() {
    let view = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let dest = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
    let map = derive_transform(&view, &dest, 2, 2);

    assert_near(apply(&map, 0.0, 0.0), (25.0, 25.0));
    assert_near(apply(&map, 1.0, 1.0), (75.0, 75.0));
    assert_eq!(map, AffineMap2D::new(50.0, 50.0, 25.0, 25.0));
}

#[test]
fn test_offset_destination_and_flipped_latitude() {
    // 4 x 3 grid over lon 0..3, lat 0..2
    let grid = GridField::new(
        vec![1000.0; 12],
        vec![0.0, 1.0, 2.0, 3.0],
        vec![2.0, 1.0, 0.0],
    )
    .unwrap();
    let view = compute_bounds(&grid).unwrap().view_rect();
    let dest = ScreenRect::new(10.0, 20.0, 400.0, 300.0);
    let map = derive_transform(&view, &dest, grid.width(), grid.height());

    for (r, &lat) in grid.lats().iter().enumerate() {
        for (c, &lon) in grid.lons().iter().enumerate() {
            let pixel_center = (60.0 + 100.0 * c as f64, 70.0 + 100.0 * r as f64);
            let screen = map.apply(GeoPoint::from_lon_lat(lon, lat));
            assert_near((screen.x, screen.y), pixel_center);
        }
    }
}

#[test]
fn test_non_square_pixels() {
    let view = grids::two_by_two();
    let view = compute_bounds(&view).unwrap().view_rect();
    let dest = ScreenRect::new(0.0, 0.0, 200.0, 50.0);
    let map = derive_transform(&view, &dest, 2, 2);

    // Pixels are 100 x 25
    assert_near(apply(&map, 0.0, -1.0), (50.0, 12.5));
    assert_near(apply(&map, 1.0, 0.0), (150.0, 37.5));
}

#[test]
fn test_scales_linearly_with_destination() {
    let view = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    let small = derive_transform(&view, &ScreenRect::new(0.0, 0.0, 360.0, 180.0), 360, 180);
    let large = derive_transform(&view, &ScreenRect::new(0.0, 0.0, 720.0, 360.0), 360, 180);

    assert!((large.scale_x - 2.0 * small.scale_x).abs() < 1e-12);
    assert!((large.scale_y - 2.0 * small.scale_y).abs() < 1e-12);
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_zero_area_destination_collapses_to_origin() {
    let view = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    for dest in [
        ScreenRect::new(7.0, 8.0, 0.0, 100.0),
        ScreenRect::new(7.0, 8.0, 100.0, 0.0),
        ScreenRect::new(7.0, 8.0, -5.0, 10.0),
        ScreenRect::new(7.0, 8.0, f64::NAN, 10.0),
    ] {
        let map = derive_transform(&view, &dest, 2, 2);
        assert!(map.is_collapsed(), "{:?}", dest);
        assert_eq!(apply(&map, 0.5, 0.5), (7.0, 8.0));
    }
}

#[test]
fn test_non_finite_origin_collapses_to_zero() {
    let view = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let dest = ScreenRect::new(f64::INFINITY, 0.0, 10.0, 10.0);
    let map = derive_transform(&view, &dest, 2, 2);
    assert_eq!(apply(&map, 1.0, 1.0), (0.0, 0.0));
}

#[test]
fn test_zero_geographic_span() {
    // A single column of cells at one longitude
    let view = BoundingBox::new(5.0, -10.0, 5.0, 10.0);
    let dest = ScreenRect::new(0.0, 0.0, 50.0, 200.0);
    let map = derive_transform(&view, &dest, 1, 4);

    assert_eq!(map.scale_x, 0.0);
    let (x, y) = apply(&map, 5.0, -10.0);
    assert_eq!(x, 25.0);
    assert_near((x, y), (25.0, 25.0));
    assert_near(apply(&map, 5.0, 10.0), (25.0, 175.0));
}

#[test]
fn test_never_produces_non_finite_output() {
    let views = [
        BoundingBox::new(0.0, 0.0, 1.0, 1.0),
        BoundingBox::new(3.0, 3.0, 3.0, 3.0),
        BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
    ];
    let dests = [
        ScreenRect::new(0.0, 0.0, 0.0, 0.0),
        ScreenRect::new(0.0, 0.0, 1.0, 1.0),
        ScreenRect::new(-50.0, 20.0, 640.0, 480.0),
        ScreenRect::new(0.0, 0.0, f64::INFINITY, 10.0),
    ];
    for view in &views {
        for dest in &dests {
            for (w, h) in [(0, 0), (1, 1), (2, 3), (1440, 721)] {
                let map = derive_transform(view, dest, w, h);
                let p = map.apply(GeoPoint::new(view.max_x, view.max_y));
                assert!(p.x.is_finite() && p.y.is_finite(), "{:?} {:?} {}x{}", view, dest, w, h);
            }
        }
    }
}
