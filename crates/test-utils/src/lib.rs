//! Test support for the pmsl viewer crates.
//!
//! - [`generators`]: synthetic pressure fields and coordinate axes
//! - [`fixtures`]: small grids, GeoJSON documents and overlay features
//! - [`paths`]: locating optional real data (ERA5, Natural Earth) and temp files
//!
//! Pull it in as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Resolves a real data file through [`find_test_file`], or returns early
/// from the calling test with a note on stderr.
///
/// ```ignore
/// #[test]
/// fn test_reads_era5() {
///     let path = require_test_file!("era5_msl_sample.nc");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "skipping: '{}' not found (set {} to a data directory)",
                    $name,
                    $crate::TEST_DATA_ENV
                );
                return;
            }
        }
    }};
}

/// Asserts `|left - right| <= epsilon` after widening both sides to `f64`.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left = $left as f64;
        let right = $right as f64;
        let epsilon = $epsilon as f64;
        let diff = (left - right).abs();
        assert!(
            diff <= epsilon,
            "assertion failed: {} ≈ {} (diff {} > {})",
            left,
            right,
            diff,
            epsilon
        );
    }};
}

/// Asserts that a point with `x`/`y` fields lies within `epsilon` of
/// `(x, y)` on both axes.
///
/// ```ignore
/// let p = transform.apply(GeoPoint::new(0.0, 0.0));
/// assert_point_near!(p, (25.0, 25.0), 1e-9);
/// ```
#[macro_export]
macro_rules! assert_point_near {
    ($point:expr, ($x:expr, $y:expr), $epsilon:expr) => {{
        let point = $point;
        $crate::assert_approx_eq!(point.x, $x, $epsilon);
        $crate::assert_approx_eq!(point.y, $y, $epsilon);
    }};
}

#[cfg(test)]
mod tests {
    struct Point {
        x: f64,
        y: f64,
    }

    #[test]
    fn test_approx_eq_within_epsilon() {
        assert_approx_eq!(1013.2501, 1013.25, 1e-3);
        assert_approx_eq!(0.5_f32, 0.5, 0.0);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_approx_eq_outside_epsilon() {
        assert_approx_eq!(1000.0, 1001.0, 0.5);
    }

    #[test]
    fn test_point_near() {
        assert_point_near!(Point { x: 25.0, y: 74.9999 }, (25.0, 75.0), 1e-3);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_point_far_on_one_axis() {
        assert_point_near!(Point { x: 25.0, y: 80.0 }, (25.0, 75.0), 1e-3);
    }
}
