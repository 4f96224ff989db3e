//! Turning raw variable contents into a [`GridField`].
//!
//! Kept free of any netcdf handles so the unpacking rules can be exercised
//! without a file on disk.

use std::ops::Range;

use field_common::GridField;

use crate::error::{NetCdfError, NetCdfResult};

/// CF packing attributes of a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packing {
    pub scale_factor: f64,
    pub add_offset: f64,
    pub fill_value: Option<f64>,
    pub missing_value: Option<f64>,
}

impl Default for Packing {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            add_offset: 0.0,
            fill_value: None,
            missing_value: None,
        }
    }
}

impl Packing {
    /// Physical value of a stored sample, or NaN for fill/missing samples.
    pub fn unpack(&self, raw: f64) -> f64 {
        if raw.is_nan() || Some(raw) == self.fill_value || Some(raw) == self.missing_value {
            return f64::NAN;
        }
        raw * self.scale_factor + self.add_offset
    }
}

/// Raw contents of the first horizontal slice of the field variable.
#[derive(Debug, Clone)]
pub struct RawField<'a> {
    pub name: &'a str,
    /// Shape of `values`, outermost first, e.g. `[1, latitude, longitude]`.
    /// Leading dimensions (time, level) must already be cut down to 1.
    pub shape: &'a [usize],
    pub values: &'a [f64],
    pub packing: Packing,
}

/// Index ranges selecting the first horizontal slice of a variable of
/// `shape`: leading dimensions pinned to index 0, the two innermost read in
/// full. `None` for fewer than two dimensions.
pub fn first_slice_ranges(shape: &[usize]) -> Option<Vec<Range<usize>>> {
    let split = shape.len().checked_sub(2)?;
    let (leading, horizontal) = shape.split_at(split);
    Some(
        leading
            .iter()
            .map(|_| 0..1)
            .chain(horizontal.iter().map(|&n| 0..n))
            .collect(),
    )
}

/// Build a grid from the first horizontal slice in `raw`.
///
/// The two innermost dimensions must match `lats` and `lons` and every
/// leading dimension must have length 1. Every unpacked value is multiplied
/// by `unit_scale` (0.01 turns Pa into hPa).
pub fn assemble_grid(
    raw: &RawField<'_>,
    lats: Vec<f64>,
    lons: Vec<f64>,
    unit_scale: f64,
) -> NetCdfResult<GridField> {
    let n_lat = lats.len();
    let n_lon = lons.len();

    let [leading @ .., dim_lat, dim_lon] = raw.shape else {
        return Err(NetCdfError::DimensionMismatch {
            variable: raw.name.to_string(),
            expected: "at least 2 dimensions".to_string(),
            found: format!("{:?}", raw.shape),
        });
    };

    if *dim_lat != n_lat || *dim_lon != n_lon || leading.iter().any(|&n| n != 1) {
        return Err(NetCdfError::DimensionMismatch {
            variable: raw.name.to_string(),
            expected: format!("[1.., {}, {}]", n_lat, n_lon),
            found: format!("{:?}", raw.shape),
        });
    }

    let slice_len = n_lat * n_lon;
    if raw.values.len() != slice_len {
        return Err(NetCdfError::DimensionMismatch {
            variable: raw.name.to_string(),
            expected: format!("{} values", slice_len),
            found: format!("{} values", raw.values.len()),
        });
    }

    let values = raw
        .values
        .iter()
        .map(|&v| raw.packing.unpack(v) * unit_scale)
        .collect();

    GridField::new(values, lons, lats).map_err(|e| NetCdfError::InvalidFormat(e.to_string()))
}
