//! Common types shared across the pmsl viewer crates.
//!
//! - [`GridField`]: an immutable scalar grid with its longitude/latitude axes
//! - [`GeoRect`] / [`BoundingBox`]: geographic extents, plain and y-flipped
//! - [`ScreenRect`]: destination rectangles in screen units
//! - [`PolygonFeature`]: overlay geometry with a precomputed bounding box
//! - [`GridSource`] / [`FeatureSource`]: the loader seams

pub mod bbox;
pub mod error;
pub mod feature;
pub mod grid;
pub mod screen;
pub mod source;

pub use bbox::{compute_bounds, BoundingBox, GeoRect};
pub use error::{DataSourceError, DegenerateRangeWarning, FieldResult, InvalidInputError};
pub use feature::{GeoPoint, Polygon, PolygonFeature};
pub use grid::GridField;
pub use screen::{ScreenPoint, ScreenRect};
pub use source::{FeatureSource, GridSource};
