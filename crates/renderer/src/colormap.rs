//! Named color ramps over the unit interval.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

/// The closed set of color ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColormapKind {
    /// Perceptually smooth rainbow (blue → green → yellow → red).
    #[default]
    Turbo,
    /// Perceptually uniform dark purple → yellow.
    Viridis,
    /// Meteorological pressure ramp: indigo lows through green to red highs.
    Pressure,
    Grayscale,
}

impl ColormapKind {
    pub const ALL: [ColormapKind; 4] = [
        ColormapKind::Turbo,
        ColormapKind::Viridis,
        ColormapKind::Pressure,
        ColormapKind::Grayscale,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColormapKind::Turbo => "turbo",
            ColormapKind::Viridis => "viridis",
            ColormapKind::Pressure => "pressure",
            ColormapKind::Grayscale => "grayscale",
        }
    }

    /// Opaque color at `t`. Values outside `[0, 1]` are clamped; NaN maps to 0.
    pub fn sample(&self, t: f64) -> Rgba<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [r, g, b] = match self {
            ColormapKind::Turbo => turbo(t),
            ColormapKind::Viridis => viridis(t),
            ColormapKind::Pressure => stops(&PRESSURE_STOPS, t),
            ColormapKind::Grayscale => [t, t, t],
        };
        Rgba([to_u8(r), to_u8(g), to_u8(b), 255])
    }
}

impl fmt::Display for ColormapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized colormap name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown colormap '{0}' (expected one of: turbo, viridis, pressure, grayscale)")]
pub struct UnknownColormap(pub String);

impl FromStr for ColormapKind {
    type Err = UnknownColormap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ColormapKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| UnknownColormap(s.to_string()))
    }
}

fn to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Polynomial fit of Google's Turbo colormap.
fn turbo(t: f64) -> [f64; 3] {
    const RED: [f64; 6] = [
        0.13572138,
        4.61539260,
        -42.66032258,
        132.13108234,
        -152.94239396,
        59.28637943,
    ];
    const GREEN: [f64; 6] = [
        0.09140261,
        2.19418839,
        4.84296658,
        -14.18503333,
        4.27729857,
        2.82956604,
    ];
    const BLUE: [f64; 6] = [
        0.10667330,
        12.64194608,
        -60.58204836,
        110.36276771,
        -89.90310912,
        27.34824973,
    ];
    [poly(&RED, t), poly(&GREEN, t), poly(&BLUE, t)]
}

/// Polynomial fit of matplotlib's viridis.
fn viridis(t: f64) -> [f64; 3] {
    const RED: [f64; 7] = [
        0.2777273272234177,
        0.1050930431085774,
        -0.3308618287255563,
        -4.634230498983486,
        6.228269936347081,
        4.776384997670288,
        -5.435455855934631,
    ];
    const GREEN: [f64; 7] = [
        0.005407344544966578,
        1.404613529898575,
        0.214847559468213,
        -5.799100973351585,
        14.17993336680509,
        -13.74514537774601,
        4.645852612178535,
    ];
    const BLUE: [f64; 7] = [
        0.3340998053353061,
        1.384590162594685,
        0.09509516302823659,
        -19.33244095627987,
        56.69055260068105,
        -65.35303263337234,
        26.3124352495832,
    ];
    [poly(&RED, t), poly(&GREEN, t), poly(&BLUE, t)]
}

/// Horner evaluation, coefficients lowest order first.
fn poly(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Pressure ramp stops, evenly spaced over `[0, 1]`.
const PRESSURE_STOPS: [[f64; 3]; 6] = [
    [75.0 / 255.0, 0.0, 130.0 / 255.0], // Indigo (stormy)
    [0.0, 0.0, 1.0],                    // Blue
    [0.0, 1.0, 0.0],                    // Green
    [1.0, 1.0, 0.0],                    // Yellow
    [1.0, 0.0, 0.0],                    // Red
    [139.0 / 255.0, 0.0, 0.0],          // Dark red
];

/// Linear interpolation between evenly spaced stops.
fn stops(colors: &[[f64; 3]], t: f64) -> [f64; 3] {
    let segments = (colors.len() - 1) as f64;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(colors.len() - 2);
    let f = pos - i as f64;
    let (a, b) = (colors[i], colors[i + 1]);
    [
        a[0] + (b[0] - a[0]) * f,
        a[1] + (b[1] - a[1]) * f,
        a[2] + (b[2] - a[2]) * f,
    ]
}
