//! Render targets: where synthesized rasters and overlay strokes end up.

use field_common::{ScreenPoint, ScreenRect};
use image::RgbaImage;
use tiny_skia::{
    Color, FilterQuality, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    Stroke, Transform,
};
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Line width (in target units) and straight-alpha RGBA color of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: [f32; 4],
}

/// A surface accepting the two primitives the viewer needs.
///
/// Coordinates are logical: the target applies its own device scaling
/// (zoom) on top of them.
pub trait RenderTarget {
    /// Fill the whole surface with a straight-alpha RGBA color.
    fn clear(&mut self, rgba: [f32; 4]);

    /// Draw `image` stretched over `dest`, one texel per grid cell.
    fn draw_image(&mut self, image: &RgbaImage, dest: &ScreenRect);

    /// Stroke a polyline, closing it back to the first point when `closed`.
    fn stroke_polyline(&mut self, points: &[ScreenPoint], closed: bool, style: &StrokeStyle);

    /// Largest scale factor the target applies to logical coordinates.
    fn max_scaling(&self) -> f64;
}

/// Offscreen tiny-skia surface with a uniform zoom and a pan offset.
pub struct PixmapTarget {
    pixmap: Pixmap,
    zoom: f64,
    pan: ScreenPoint,
}

impl PixmapTarget {
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSurface { width, height })?;
        Ok(Self {
            pixmap,
            zoom: 1.0,
            pan: ScreenPoint::new(0.0, 0.0),
        })
    }

    /// Magnify logical coordinates by `zoom` and shift them by `pan` device
    /// pixels. Non-positive or non-finite zoom is ignored.
    pub fn with_view(mut self, zoom: f64, pan: ScreenPoint) -> Self {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
        if pan.x.is_finite() && pan.y.is_finite() {
            self.pan = pan;
        }
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Surface size in logical units.
    pub fn logical_size(&self) -> (f64, f64) {
        (
            self.pixmap.width() as f64 / self.zoom,
            self.pixmap.height() as f64 / self.zoom,
        )
    }

    pub fn device_transform(&self) -> Transform {
        Transform::from_row(
            self.zoom as f32,
            0.0,
            0.0,
            self.zoom as f32,
            self.pan.x as f32,
            self.pan.y as f32,
        )
    }

    /// Straight-alpha color of the device pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl RenderTarget for PixmapTarget {
    fn clear(&mut self, rgba: [f32; 4]) {
        self.pixmap.fill(skia_color(rgba));
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: &ScreenRect) {
        if dest.is_empty() {
            return;
        }
        let texture = match image_to_pixmap(image) {
            Ok(texture) => texture,
            Err(e) => {
                debug!(error = %e, "Skipping texture draw");
                return;
            }
        };

        let transform = self
            .device_transform()
            .pre_translate(dest.x as f32, dest.y as f32)
            .pre_scale(
                (dest.width / image.width() as f64) as f32,
                (dest.height / image.height() as f64) as f32,
            );
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, texture.as_ref(), &paint, transform, None);
    }

    fn stroke_polyline(&mut self, points: &[ScreenPoint], closed: bool, style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x as f32, points[0].y as f32);
        for point in &points[1..] {
            pb.line_to(point.x as f32, point.y as f32);
        }
        if closed {
            pb.close();
        }

        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(skia_color(style.color));
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.device_transform(), None);
    }

    fn max_scaling(&self) -> f64 {
        self.zoom
    }
}

/// Upload a straight-alpha image as a premultiplied pixmap.
pub fn image_to_pixmap(image: &RgbaImage) -> RenderResult<Pixmap> {
    let (width, height) = image.dimensions();
    let invalid = || RenderError::InvalidImage { width, height };

    let size = IntSize::from_wh(width, height).ok_or_else(invalid)?;
    let mut data = Vec::with_capacity(image.as_raw().len());
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        let p = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
        data.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
    }
    Pixmap::from_vec(data, size).ok_or_else(invalid)
}

pub(crate) fn skia_color(rgba: [f32; 4]) -> Color {
    let [r, g, b, a] = rgba.map(|c| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 });
    Color::from_rgba(r, g, b, a).unwrap_or(Color::BLACK)
}

/// One primitive call captured by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear([f32; 4]),
    Image {
        width: u32,
        height: u32,
        dest: ScreenRect,
    },
    Polyline {
        points: Vec<ScreenPoint>,
        closed: bool,
        style: StrokeStyle,
    },
}

/// Target that records calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub calls: Vec<DrawCall>,
    pub scaling: f64,
}

impl RecordingTarget {
    pub fn new(scaling: f64) -> Self {
        Self {
            calls: Vec::new(),
            scaling,
        }
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[ScreenPoint], bool, &StrokeStyle)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Polyline {
                points,
                closed,
                style,
            } => Some((points.as_slice(), *closed, style)),
            _ => None,
        })
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self, rgba: [f32; 4]) {
        self.calls.push(DrawCall::Clear(rgba));
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: &ScreenRect) {
        self.calls.push(DrawCall::Image {
            width: image.width(),
            height: image.height(),
            dest: *dest,
        });
    }

    fn stroke_polyline(&mut self, points: &[ScreenPoint], closed: bool, style: &StrokeStyle) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            closed,
            style: *style,
        });
    }

    fn max_scaling(&self) -> f64 {
        self.scaling
    }
}
