//! Vector overlay geometry.
//!
//! Coordinates are stored in (lon, -lat) space, the same convention the
//! overlay and the view rectangle use.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// A vertex in (lon, -lat) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a GeoJSON-style `[lon, lat]` position.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { x: lon, y: -lat }
    }
}

/// One polygon: an exterior ring and zero or more holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Vec<GeoPoint>,
    #[serde(default)]
    pub holes: Vec<Vec<GeoPoint>>,
}

impl Polygon {
    pub fn new(exterior: Vec<GeoPoint>, holes: Vec<Vec<GeoPoint>>) -> Self {
        Self { exterior, holes }
    }

    /// Exterior first, then holes.
    pub fn rings(&self) -> impl Iterator<Item = &[GeoPoint]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }
}

/// A named (multi-)polygon with its bounding box computed once at load.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFeature {
    name: Option<String>,
    polygons: Vec<Polygon>,
    bbox: Option<BoundingBox>,
}

impl PolygonFeature {
    pub fn new(name: Option<String>, polygons: Vec<Polygon>) -> Self {
        let bbox = BoundingBox::from_points(
            polygons
                .iter()
                .flat_map(|p| p.exterior.iter())
                .map(|pt| (pt.x, pt.y)),
        );
        Self {
            name,
            polygons,
            bbox,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Bounding box of all exterior rings; `None` for a feature without vertices.
    pub fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// Total vertex count over every ring.
    pub fn vertex_count(&self) -> usize {
        self.polygons
            .iter()
            .flat_map(|p| p.rings())
            .map(<[GeoPoint]>::len)
            .sum()
    }
}
