/// WF3D Core Library - Wireframe rendering to bitmap files
///
/// This library provides the stateless rendering pipeline: rotation of
/// object-space vertices, perspective projection, Bresenham line
/// rasterization into an RGB buffer and 24-bit bitmap encoding.

pub mod bmp;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use bmp::{BmpHeader, RowOrder};
pub use error::{Error, Result};
pub use geometry::{Edge, Point2D, Point3D, Wireframe};
pub use projection::{Camera, DEFAULT_FOCAL_LENGTH, DEFAULT_Z_OFFSET};
pub use raster::{Canvas, Color};
pub use scene::{render, render_to_file, render_to_writer, RenderConfig};
pub use transform::{Orientation, Transform};
