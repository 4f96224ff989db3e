//! Raster and overlay compositing for sea-level pressure fields.
//!
//! Pipeline:
//! - [`range`]: filtered-min / unfiltered-max display range
//! - [`gradient`]: color-mapped raster synthesis
//! - [`viewport`]: pixel-center aligned geographic to screen transform
//! - [`overlay`]: culled coastline polygons stroked at constant pixel width
//! - [`scene`]: load-once products and the per-frame entry point

pub mod colormap;
pub mod config;
pub mod error;
pub mod gradient;
pub mod overlay;
pub mod range;
pub mod scene;
pub mod target;
pub mod viewport;

pub use colormap::{ColormapKind, UnknownColormap};
pub use config::{OverlayStyle, ViewerConfig};
pub use error::{ConfigError, RenderError, RenderResult, SceneError};
pub use gradient::synthesize;
pub use overlay::VectorOverlay;
pub use range::{compute_display_range, DisplayRange, PRESSURE_FLOOR_HPA};
pub use scene::{FrameInfo, Scene};
pub use target::{PixmapTarget, RecordingTarget, RenderTarget, StrokeStyle};
pub use viewport::{derive_transform, AffineMap2D};
