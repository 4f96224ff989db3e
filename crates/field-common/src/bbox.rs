//! Geographic extents.
//!
//! Two conventions are in play:
//! - [`GeoRect`] holds plain longitude/latitude extrema of a grid.
//! - [`BoundingBox`] lives in the overlay's (lon, -lat) space, where y grows
//!   southward just like screen rows do. [`GeoRect::view_rect`] converts.

use serde::{Deserialize, Serialize};

use crate::error::{FieldResult, InvalidInputError};
use crate::grid::GridField;

/// An axis-aligned box in (lon, -lat) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let mut bbox = Self::new(x0, y0, x0, y0);
        for (x, y) in iter {
            bbox.expand_to(x, y);
        }
        Some(bbox)
    }

    /// Grow the box so that it contains `(x, y)`.
    pub fn expand_to(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Overlap test. Shared edges count, so a feature that only touches the
    /// data extent is still drawn.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

/// Longitude/latitude extrema of a grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl GeoRect {
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// The same extent in (lon, -lat) space: `y_min = -lat_max`, `y_max = -lat_min`.
    pub fn view_rect(&self) -> BoundingBox {
        BoundingBox::new(self.lon_min, -self.lat_max, self.lon_max, -self.lat_min)
    }
}

/// Compute the longitude/latitude extrema of a grid's axes.
///
/// One pass per axis. Axis direction is irrelevant.
pub fn compute_bounds(grid: &GridField) -> FieldResult<GeoRect> {
    let (lon_min, lon_max) =
        axis_extent(grid.lons()).ok_or(InvalidInputError::EmptyAxis("longitude"))?;
    let (lat_min, lat_max) =
        axis_extent(grid.lats()).ok_or(InvalidInputError::EmptyAxis("latitude"))?;

    Ok(GeoRect {
        lon_min,
        lon_max,
        lat_min,
        lat_max,
    })
}

fn axis_extent(axis: &[f64]) -> Option<(f64, f64)> {
    if axis.is_empty() {
        return None;
    }
    Some(axis.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}
