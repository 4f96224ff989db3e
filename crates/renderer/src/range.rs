//! Display range for colormap normalization.

use field_common::{DegenerateRangeWarning, FieldResult, GridField, InvalidInputError};
use serde::{Deserialize, Serialize};

/// Cells below this value (hPa) never set the colormap floor.
///
/// Near-zero and otherwise invalid readings would otherwise drag the floor
/// down and wash out every realistic pressure into the bottom color.
pub const PRESSURE_FLOOR_HPA: f64 = 100.0;

/// Normalization domain for color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub low: f64,
    pub high: f64,
}

impl DisplayRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `high - low`.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// A zero-width or non-finite range cannot be divided by.
    pub fn degeneracy(&self) -> Option<DegenerateRangeWarning> {
        let width = self.width();
        if width == 0.0 || !width.is_finite() {
            Some(DegenerateRangeWarning {
                low: self.low,
                high: self.high,
            })
        } else {
            None
        }
    }
}

/// Compute the display range of a grid.
///
/// `high` is the maximum over every cell. `low` is the minimum over cells
/// `>= 100` only, falling back to `100` when no cell qualifies. NaN cells
/// are ignored by both. With no numeric cell at all, `high` is set to `low`.
pub fn compute_display_range(grid: &GridField) -> FieldResult<DisplayRange> {
    if grid.is_empty() {
        return Err(InvalidInputError::EmptyGrid);
    }

    let mut low: Option<f64> = None;
    let mut high: Option<f64> = None;

    for &v in grid.values() {
        if v >= PRESSURE_FLOOR_HPA && low.map_or(true, |mn| v < mn) {
            low = Some(v);
        }
        if !v.is_nan() && high.map_or(true, |mx| v > mx) {
            high = Some(v);
        }
    }

    let low = low.unwrap_or(PRESSURE_FLOOR_HPA);
    let high = high.unwrap_or(low);

    Ok(DisplayRange { low, high })
}
