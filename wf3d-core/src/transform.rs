/// Rigid rotation of object-space points
use nalgebra::{Rotation3, Vector3};

use crate::geometry::Point3D;

/// Viewing angles for a render (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Rotation about the vertical (y) axis, applied first
    pub yaw: f32,
    /// Rotation about the horizontal (x) axis, applied second
    pub pitch: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn zero() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(0.6, 0.5)
    }
}

/// Rotation helpers
pub struct Transform;

impl Transform {
    /// Rotation matrix for an orientation: yaw in the x-z plane, then pitch
    /// in the y-z plane.
    pub fn rotation_matrix(orientation: &Orientation) -> Rotation3<f32> {
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), orientation.yaw);
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), orientation.pitch);

        pitch * yaw
    }

    /// Rotate a point about the origin
    pub fn rotate(point: &Point3D, orientation: &Orientation) -> Point3D {
        Self::rotation_matrix(orientation) * point
    }
}
