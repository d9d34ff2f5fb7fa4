/// Perspective projection onto the image plane
use nalgebra::Point2;

use crate::geometry::{Point2D, Point3D};

/// Distance from the pinhole to the image plane, in pixels
pub const DEFAULT_FOCAL_LENGTH: f32 = 600.0;

/// Distance from the camera to the object-space origin
pub const DEFAULT_Z_OFFSET: f32 = 5.0;

/// Fixed pinhole camera looking down +z at the origin.
///
/// Points with `z + z_offset <= 0` sit at or behind the camera and project
/// to meaningless coordinates; keep geometry within `z_offset` of the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub focal_length: f32,
    pub z_offset: f32,
}

impl Camera {
    pub fn new(focal_length: f32, z_offset: f32) -> Self {
        Self {
            focal_length,
            z_offset,
        }
    }

    /// Project a rotated point to pixel coordinates in a `width`x`height`
    /// image. Image rows grow downward, so y is flipped.
    pub fn project(&self, point: &Point3D, width: u32, height: u32) -> Point2D {
        let factor = self.focal_length / (point.z + self.z_offset);

        // Float to int casts saturate, so degenerate depths stay finite here
        let x = (point.x * factor).round() as i32;
        let y = (-point.y * factor).round() as i32;

        Point2::new(
            x.saturating_add((width / 2) as i32),
            y.saturating_add((height / 2) as i32),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_FOCAL_LENGTH, DEFAULT_Z_OFFSET)
    }
}
