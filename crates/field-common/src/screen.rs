//! Screen-space geometry.

use serde::{Deserialize, Serialize};

/// A point in screen/device units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A destination rectangle: origin plus size, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of `width x height` centered on `center`.
    pub fn centered(center: ScreenPoint, width: f64, height: f64) -> Self {
        Self::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    pub fn origin(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when the rectangle covers no area or has non-finite geometry.
    pub fn is_empty(&self) -> bool {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0
    }
}
