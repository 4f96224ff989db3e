//! Synthetic pressure fields and coordinate axes.

use field_common::GridField;

/// Creates a sea-level pressure field in hPa.
///
/// A low sits near the top-left quarter and a high near the bottom-right,
/// giving values roughly between 975 and 1045 hPa.
pub fn create_pressure_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    let w = width.max(1) as f64;
    let h = height.max(1) as f64;

    for row in 0..height {
        for col in 0..width {
            let x = col as f64 / w;
            let y = row as f64 / h;
            let low = gaussian(x - 0.25, y - 0.3, 0.15) * 35.0;
            let high = gaussian(x - 0.7, y - 0.7, 0.2) * 35.0;
            data.push(1010.0 - low + high);
        }
    }
    data
}

/// Same as [`create_pressure_grid`] but in pascals, as stored in ERA5 files.
pub fn create_pressure_grid_pa(width: usize, height: usize) -> Vec<f64> {
    create_pressure_grid(width, height)
        .into_iter()
        .map(|hpa| hpa * 100.0)
        .collect()
}

/// Evenly spaced axis from `start` to `end` inclusive.
pub fn create_axis(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// A pressure [`GridField`] covering `[lon_min, lon_max] x [lat_min, lat_max]`,
/// rows running north to south.
pub fn create_pressure_field(
    width: usize,
    height: usize,
    (lon_min, lon_max): (f64, f64),
    (lat_min, lat_max): (f64, f64),
) -> GridField {
    GridField::new(
        create_pressure_grid(width, height),
        create_axis(lon_min, lon_max, width),
        create_axis(lat_max, lat_min, height),
    )
    .expect("generated axes always match the generated values")
}

fn gaussian(dx: f64, dy: f64, sigma: f64) -> f64 {
    (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_grid_is_plausible() {
        let grid = create_pressure_grid(64, 32);
        assert_eq!(grid.len(), 64 * 32);
        assert!(grid.iter().all(|v| (950.0..=1060.0).contains(v)));
    }

    #[test]
    fn test_pressure_grid_pa_scales() {
        let hpa = create_pressure_grid(4, 4);
        let pa = create_pressure_grid_pa(4, 4);
        for (a, b) in hpa.iter().zip(&pa) {
            assert!((a * 100.0 - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_create_axis() {
        assert_eq!(create_axis(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(create_axis(90.0, -90.0, 3), vec![90.0, 0.0, -90.0]);
        assert_eq!(create_axis(5.0, 10.0, 1), vec![5.0]);
        assert!(create_axis(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_create_pressure_field_runs_north_to_south() {
        let field = create_pressure_field(8, 4, (120.0, 150.0), (20.0, 50.0));
        assert_eq!(field.lats().first(), Some(&50.0));
        assert_eq!(field.lats().last(), Some(&20.0));
        assert_eq!(field.lons().first(), Some(&120.0));
    }
}
