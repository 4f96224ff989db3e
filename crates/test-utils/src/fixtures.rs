//! Common test fixtures for overlay and grid tests.

/// GeoJSON documents.
pub mod geojson {
    /// Two countries: a polygon near Japan and a multipolygon with a hole far
    /// away in the South Atlantic.
    pub const TWO_COUNTRIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Inside" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[130.0, 30.0], [140.0, 30.0], [140.0, 40.0], [130.0, 40.0], [130.0, 30.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "ADMIN": "Outside" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [
                            [[-20.0, -40.0], [-10.0, -40.0], [-10.0, -30.0], [-20.0, -30.0], [-20.0, -40.0]],
                            [[-16.0, -36.0], [-14.0, -36.0], [-14.0, -34.0], [-16.0, -34.0], [-16.0, -36.0]]
                        ],
                        [
                            [[-5.0, -40.0], [-1.0, -40.0, 12.5], [-1.0, -35.0], [-5.0, -40.0]]
                        ]
                    ]
                }
            }
        ]
    }"#;

    /// Mixed geometry types; only the polygon should survive.
    pub const MIXED_GEOMETRIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Coast" },
                "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
            },
            {
                "type": "Feature",
                "properties": { "name": "Capital" },
                "geometry": { "type": "Point", "coordinates": [139.7, 35.7] }
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": { "name": 42, "NAME": "Island" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }
        ]
    }"#;

    /// A bare Feature rather than a collection.
    pub const SINGLE_FEATURE: &str = r#"{
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[10.0, 50.0], [11.0, 50.0], [11.0, 51.0], [10.0, 50.0]]]
        }
    }"#;

    pub const EMPTY_COLLECTION: &str = r#"{ "type": "FeatureCollection", "features": [] }"#;
}

/// Overlay features built directly, without going through GeoJSON.
pub mod features {
    use field_common::{GeoPoint, Polygon, PolygonFeature};

    /// A closed axis-aligned square ring in (lon, -lat) space.
    pub fn square_ring(x0: f64, y0: f64, size: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(x0, y0),
            GeoPoint::new(x0 + size, y0),
            GeoPoint::new(x0 + size, y0 + size),
            GeoPoint::new(x0, y0 + size),
            GeoPoint::new(x0, y0),
        ]
    }

    /// A single-square feature.
    pub fn square_feature(name: &str, x0: f64, y0: f64, size: f64) -> PolygonFeature {
        PolygonFeature::new(
            Some(name.to_string()),
            vec![Polygon::new(square_ring(x0, y0, size), vec![])],
        )
    }
}

/// Small grids with known answers.
pub mod grids {
    use field_common::GridField;

    /// `[[50, 150], [300, 100]]` on lons `[0, 1]`, lats `[0, 1]`.
    ///
    /// Display range is `{low: 100, high: 300}`.
    pub fn two_by_two() -> GridField {
        GridField::from_rows(
            vec![vec![50.0, 150.0], vec![300.0, 100.0]],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
        )
        .expect("fixture shape is valid")
    }

    /// Every cell below the 100 hPa floor.
    pub fn all_below_floor() -> GridField {
        GridField::from_rows(
            vec![vec![0.0, 12.5, 99.9], vec![-3.0, 50.0, 7.0]],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0],
        )
        .expect("fixture shape is valid")
    }

    /// A single repeated value.
    pub fn constant(value: f64, width: usize, height: usize) -> GridField {
        GridField::new(
            vec![value; width * height],
            (0..width).map(|c| c as f64).collect(),
            (0..height).map(|r| -(r as f64)).collect(),
        )
        .expect("fixture shape is valid")
    }
}
