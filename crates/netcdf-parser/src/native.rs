//! Native NetCDF reading using the netcdf library.

use std::path::Path;
use std::sync::Once;

use field_common::GridField;
use tracing::{debug, info};

use crate::assemble::{assemble_grid, first_slice_ranges, Packing, RawField};
use crate::error::{NetCdfError, NetCdfResult};
use crate::VariableNames;

/// Turns off HDF5's automatic error stack printing.
///
/// Probing for optional attributes such as `_FillValue` makes the C library
/// dump error stacks to stderr even though the lookup failure is expected.
/// Idempotent.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: a null handler on the default stack is the documented way to
        // disable automatic printing.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Read the first horizontal slice of a field variable plus its axes.
pub fn read_grid(path: &Path, names: &VariableNames, unit_scale: f64) -> NetCdfResult<GridField> {
    silence_hdf5_errors();

    if !path.exists() {
        return Err(NetCdfError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }

    let nc_file = netcdf::open(path)
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to open NetCDF: {}", e)))?;

    let lat_var = nc_file
        .variable(&names.latitude)
        .ok_or_else(|| NetCdfError::MissingData(names.latitude.clone()))?;
    let lon_var = nc_file
        .variable(&names.longitude)
        .ok_or_else(|| NetCdfError::MissingData(names.longitude.clone()))?;
    let field_var = nc_file
        .variable(&names.field)
        .ok_or_else(|| NetCdfError::MissingData(names.field.clone()))?;

    let lats: Vec<f64> = lat_var
        .get_values(..)
        .map_err(|e| read_error(&names.latitude, e))?;
    let lons: Vec<f64> = lon_var
        .get_values(..)
        .map_err(|e| read_error(&names.longitude, e))?;

    let shape: Vec<usize> = field_var.dimensions().iter().map(|d| d.len()).collect();
    debug!(
        variable = %names.field,
        ?shape,
        n_lat = lats.len(),
        n_lon = lons.len(),
        "Reading field variable"
    );

    // Only the first time step / level is read; leading dimensions collapse to 1
    let ranges = first_slice_ranges(&shape).ok_or_else(|| NetCdfError::DimensionMismatch {
        variable: names.field.clone(),
        expected: "at least 2 dimensions".to_string(),
        found: format!("{:?}", shape),
    })?;
    let slice_shape: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
    let extents: Vec<netcdf::Extent> = ranges.into_iter().map(Into::into).collect();

    let raw: Vec<f64> = field_var
        .get_values(extents)
        .map_err(|e| read_error(&names.field, e))?;

    let packing = Packing {
        scale_factor: get_f64_attr(&field_var, "scale_factor").unwrap_or(1.0),
        add_offset: get_f64_attr(&field_var, "add_offset").unwrap_or(0.0),
        fill_value: get_f64_attr(&field_var, "_FillValue"),
        missing_value: get_f64_attr(&field_var, "missing_value"),
    };

    let grid = assemble_grid(
        &RawField {
            name: &names.field,
            shape: &slice_shape,
            values: &raw,
            packing,
        },
        lats,
        lons,
        unit_scale,
    )?;

    info!(
        path = %path.display(),
        variable = %names.field,
        width = grid.width(),
        height = grid.height(),
        "Loaded grid"
    );

    Ok(grid)
}

// =============================================================================
// Internal helpers
// =============================================================================

fn read_error(variable: &str, e: netcdf::Error) -> NetCdfError {
    NetCdfError::InvalidFormat(format!("Failed to read {}: {}", variable, e))
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Helper to get f64 attribute.
fn get_f64_attr(var: &netcdf::Variable, name: &str) -> Option<f64> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f64::try_from(attr_value).ok()
}
