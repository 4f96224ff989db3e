//! Loader seams for grids and overlay geometry.

use std::path::Path;

use crate::error::DataSourceError;
use crate::feature::PolygonFeature;
use crate::grid::GridField;

/// Something that can produce a [`GridField`] from a file.
pub trait GridSource {
    /// Load the scalar field together with its latitude/longitude axes.
    fn load_grid(&self, path: &Path) -> Result<GridField, DataSourceError>;
}

/// Something that can produce overlay polygons from a file.
pub trait FeatureSource {
    fn load_features(&self, path: &Path) -> Result<Vec<PolygonFeature>, DataSourceError>;
}
