/// 3D transformation matrices and orientation state
use nalgebra::{Matrix4, Vector3};

/// Orientation of the displayed object around three axes (in radians).
///
/// `y` carries the automatic spin; `x` and `z` carry the pointer-driven
/// tilt. Only the rotation controller and an explicit reset mutate these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Snap all three angles back to exactly zero.
    pub fn reset(&mut self) {
        *self = Self::zero();
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from an orientation
    pub fn rotation_matrix(orientation: &Orientation) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(orientation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, orientation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, orientation.z));

        // Apply rotations in order: Z, Y, X
        rz * ry * rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_reset() {
        let mut orientation = Orientation::new(0.4, 2.1, -0.3);
        orientation.reset();
        assert_eq!(orientation, Orientation::zero());
    }

    #[test]
    fn test_identity_rotation() {
        let orientation = Orientation::zero();
        let matrix = Transform::rotation_matrix(&orientation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_y_rotation_moves_x_axis() {
        let orientation = Orientation::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let matrix = Transform::rotation_matrix(&orientation);
        let rotated = matrix.transform_vector(&Vector3::new(1.0, 0.0, 0.0));
        // Quarter turn around Y sends +X to -Z
        assert!((rotated - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }
}
