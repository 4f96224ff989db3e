//! Serde mirror of the GeoJSON subset used for overlays.
//!
//! See: <https://datatracker.ietf.org/doc/html/rfc7946>

use serde::Deserialize;
use serde_json::{Map, Value};

/// `[lon, lat]` or `[lon, lat, alt]`; anything past the second element is ignored.
pub type Position = Vec<f64>;

/// Top-level GeoJSON object.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonDocument {
    FeatureCollection { features: Vec<Feature> },
    Feature(Feature),
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Null geometries are allowed by RFC 7946.
    #[serde(default)]
    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Geometry types. Only the polygonal ones produce overlay features.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        /// First ring is the exterior, the rest are holes.
        coordinates: Vec<Vec<Position>>,
    },

    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },

    #[serde(other)]
    Unsupported,
}

/// Property keys probed, in order, for a display name.
pub const NAME_KEYS: [&str; 4] = ["name", "NAME", "ADMIN", "admin"];

impl Feature {
    /// The first string-valued name-like property.
    pub fn name(&self) -> Option<String> {
        let properties = self.properties.as_ref()?;
        NAME_KEYS
            .iter()
            .find_map(|key| properties.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }
}
