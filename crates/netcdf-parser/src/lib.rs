//! NetCDF grid source for sea-level pressure fields.
//!
//! Reads ERA5-style files: a `msl` variable in pascals laid out as
//! `[time, latitude, longitude]` (or with an extra level dimension), with
//! `latitude` and `longitude` coordinate variables. Only the first time step
//! is used. Values are converted to hectopascals by multiplying by `0.01`.
//!
//! Packed variables (`scale_factor` / `add_offset`) are unpacked, and samples
//! equal to `_FillValue` or `missing_value` become NaN.

pub mod assemble;
pub mod error;
pub mod native;

use std::path::Path;

use field_common::{DataSourceError, GridField, GridSource};

pub use assemble::{assemble_grid, first_slice_ranges, Packing, RawField};
pub use error::{NetCdfError, NetCdfResult};
pub use native::{read_grid, silence_hdf5_errors};

/// Pascals to hectopascals.
pub const PA_TO_HPA: f64 = 0.01;

/// Names of the variables to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNames {
    pub field: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for VariableNames {
    fn default() -> Self {
        Self {
            field: "msl".to_string(),
            latitude: "latitude".to_string(),
            longitude: "longitude".to_string(),
        }
    }
}

/// [`GridSource`] backed by the netcdf library.
#[derive(Debug, Clone)]
pub struct NetCdfGridSource {
    pub names: VariableNames,
    /// Multiplier applied after unpacking.
    pub unit_scale: f64,
}

impl Default for NetCdfGridSource {
    fn default() -> Self {
        Self {
            names: VariableNames::default(),
            unit_scale: PA_TO_HPA,
        }
    }
}

impl GridSource for NetCdfGridSource {
    fn load_grid(&self, path: &Path) -> Result<GridField, DataSourceError> {
        Ok(read_grid(path, &self.names, self.unit_scale)?)
    }
}
