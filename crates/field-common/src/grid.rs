//! Scalar grids on a regular latitude/longitude lattice.

use crate::error::{FieldResult, InvalidInputError};

/// An immutable 2D scalar field with its geographic axes.
///
/// Values are row-major: `values[row * width + col]`, where row `r` sits at
/// latitude `lats[r]` and column `c` at longitude `lons[c]`. Both axes are
/// expected to be strictly monotonic; direction is not assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct GridField {
    values: Vec<f64>,
    lons: Vec<f64>,
    lats: Vec<f64>,
}

impl GridField {
    /// Build a grid, checking that `values.len() == lons.len() * lats.len()`.
    pub fn new(values: Vec<f64>, lons: Vec<f64>, lats: Vec<f64>) -> FieldResult<Self> {
        if values.len() != lons.len() * lats.len() {
            return Err(InvalidInputError::ShapeMismatch {
                width: lons.len(),
                height: lats.len(),
                values: values.len(),
            });
        }
        Ok(Self { values, lons, lats })
    }

    /// Build a grid from nested rows (row `r` at `lats[r]`).
    pub fn from_rows(rows: Vec<Vec<f64>>, lons: Vec<f64>, lats: Vec<f64>) -> FieldResult<Self> {
        let width = lons.len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(InvalidInputError::ShapeMismatch {
                width,
                height: lats.len(),
                values: rows.iter().map(Vec::len).sum(),
            });
        }
        Self::new(rows.into_iter().flatten().collect(), lons, lats)
    }

    /// Number of columns (longitude points).
    pub fn width(&self) -> usize {
        self.lons.len()
    }

    /// Number of rows (latitude points).
    pub fn height(&self) -> usize {
        self.lats.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.values.get(row * self.width() + col).copied()
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let width = self.width();
        self.values.get(row * width..(row + 1) * width)
    }

    /// A copy oriented so that row 0 is the northernmost latitude and column 0
    /// the westernmost longitude.
    ///
    /// The overlay maps `y = -lat`, so screen rows grow southward; the raster
    /// has to agree or coastlines end up mirrored against the field.
    pub fn north_up(&self) -> GridField {
        let flip_rows = is_ascending(&self.lats);
        let flip_cols = is_descending(&self.lons);
        if !flip_rows && !flip_cols {
            return self.clone();
        }

        let width = self.width();
        let height = self.height();
        let mut values = Vec::with_capacity(self.values.len());
        for r in 0..height {
            let src_row = if flip_rows { height - 1 - r } else { r };
            let row = &self.values[src_row * width..(src_row + 1) * width];
            if flip_cols {
                values.extend(row.iter().rev());
            } else {
                values.extend_from_slice(row);
            }
        }

        let mut lats = self.lats.clone();
        if flip_rows {
            lats.reverse();
        }
        let mut lons = self.lons.clone();
        if flip_cols {
            lons.reverse();
        }

        GridField { values, lons, lats }
    }
}

fn is_ascending(axis: &[f64]) -> bool {
    matches!((axis.first(), axis.last()), (Some(a), Some(b)) if b > a)
}

fn is_descending(axis: &[f64]) -> bool {
    matches!((axis.first(), axis.last()), (Some(a), Some(b)) if b < a)
}
