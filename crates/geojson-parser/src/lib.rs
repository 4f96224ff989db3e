//! GeoJSON polygon feature source.
//!
//! Reads `Polygon` and `MultiPolygon` features from a FeatureCollection (or a
//! single Feature) and converts every `[lon, lat]` position to the overlay's
//! `(lon, -lat)` convention. Each feature's bounding box is computed once here.
//! Other geometry types are skipped.

pub mod types;

use std::path::Path;

use field_common::{DataSourceError, FeatureSource, GeoPoint, Polygon, PolygonFeature};
use tracing::{debug, info};

use types::{Feature, GeoJsonDocument, Geometry, Position};

/// [`FeatureSource`] reading GeoJSON files.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonFeatureSource;

impl FeatureSource for GeoJsonFeatureSource {
    fn load_features(&self, path: &Path) -> Result<Vec<PolygonFeature>, DataSourceError> {
        let content = std::fs::read_to_string(path)?;
        let features = parse_features(&content)?;
        info!(path = %path.display(), features = features.len(), "Loaded overlay features");
        Ok(features)
    }
}

/// Parse a GeoJSON document into polygon features.
pub fn parse_features(json: &str) -> Result<Vec<PolygonFeature>, DataSourceError> {
    let document: GeoJsonDocument = serde_json::from_str(json)?;

    let raw = match document {
        GeoJsonDocument::FeatureCollection { features } => features,
        GeoJsonDocument::Feature(feature) => vec![feature],
    };

    let total = raw.len();
    let features: Vec<PolygonFeature> = raw.into_iter().filter_map(convert_feature).collect();

    if features.len() < total {
        debug!(
            skipped = total - features.len(),
            "Skipped features without polygon geometry"
        );
    }

    Ok(features)
}

fn convert_feature(feature: Feature) -> Option<PolygonFeature> {
    let name = feature.name();
    let polygons = match feature.geometry? {
        Geometry::Polygon { coordinates } => vec![convert_polygon(coordinates)?],
        Geometry::MultiPolygon { coordinates } => coordinates
            .into_iter()
            .filter_map(convert_polygon)
            .collect(),
        Geometry::Unsupported => return None,
    };

    if polygons.is_empty() {
        return None;
    }
    Some(PolygonFeature::new(name, polygons))
}

fn convert_polygon(rings: Vec<Vec<Position>>) -> Option<Polygon> {
    let mut rings = rings.into_iter().map(convert_ring);
    let exterior = rings.next()?;
    if exterior.is_empty() {
        return None;
    }
    let holes = rings.filter(|ring| !ring.is_empty()).collect();
    Some(Polygon::new(exterior, holes))
}

/// Positions with fewer than two ordinates are dropped.
fn convert_ring(ring: Vec<Position>) -> Vec<GeoPoint> {
    ring.iter()
        .filter_map(|pos| match pos.as_slice() {
            [lon, lat, ..] => Some(GeoPoint::from_lon_lat(*lon, *lat)),
            _ => None,
        })
        .collect()
}
