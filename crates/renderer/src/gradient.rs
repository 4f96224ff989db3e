//! Color-mapped raster synthesis for gridded pressure data.

use field_common::GridField;
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::colormap::ColormapKind;
use crate::range::DisplayRange;

/// Pixel written for missing (NaN) cells.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Normalized position used for every cell when the range has no width.
pub const DEGENERATE_T: f64 = 0.5;

/// Normalization from data value to the unit interval for one display range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalizer {
    Linear { low: f64, width: f64 },
    /// `high < low`, as when the pressure floor sits above an all-low grid.
    /// Values under `low` sit below the range and take the start of the ramp.
    Inverted { low: f64 },
    /// Zero-width or non-finite range: every value maps to [`DEGENERATE_T`].
    Constant,
}

impl Normalizer {
    pub fn for_range(range: &DisplayRange) -> Self {
        match range.degeneracy() {
            Some(_) => Normalizer::Constant,
            None if range.high < range.low => Normalizer::Inverted { low: range.low },
            None => Normalizer::Linear {
                low: range.low,
                width: range.width(),
            },
        }
    }

    /// Normalized and clamped position of `value`. NaN for a NaN value.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        match *self {
            Normalizer::Linear { low, width } => ((value - low) / width).clamp(0.0, 1.0),
            Normalizer::Inverted { low } => {
                if value < low {
                    0.0
                } else {
                    1.0
                }
            }
            Normalizer::Constant => DEGENERATE_T,
        }
    }
}

/// Map every grid cell through `kind` into an image of the same dimensions.
///
/// Row `r`, column `c` of the grid lands on pixel `(c, r)`. NaN cells become
/// fully transparent. A degenerate range paints every finite cell with the
/// colormap's midpoint and logs a warning.
pub fn synthesize(grid: &GridField, range: &DisplayRange, kind: ColormapKind) -> RgbaImage {
    let width = grid.width();
    let height = grid.height();
    let mut image = RgbaImage::new(width as u32, height as u32);
    if grid.is_empty() {
        return image;
    }

    if let Some(warning) = range.degeneracy() {
        warn!(
            low = warning.low,
            high = warning.high,
            colormap = %kind,
            "{}",
            warning
        );
    }
    let normalizer = Normalizer::for_range(range);

    image
        .par_chunks_mut(width * 4)
        .zip(grid.values().par_chunks(width))
        .for_each(|(pixels, values)| {
            for (pixel, &value) in pixels.chunks_exact_mut(4).zip(values) {
                let color = color_for(value, &normalizer, kind);
                pixel.copy_from_slice(&color.0);
            }
        });

    debug!(
        width = width,
        height = height,
        colormap = %kind,
        low = range.low,
        high = range.high,
        "Synthesized raster"
    );

    image
}

fn color_for(value: f64, normalizer: &Normalizer, kind: ColormapKind) -> Rgba<u8> {
    let t = normalizer.normalize(value);
    if t.is_nan() {
        TRANSPARENT
    } else {
        kind.sample(t)
    }
}
