//! Model transform composed by the render backend.
//!
//! The camera never sees the model matrix; the backend combines it with
//! the camera's projection and view via
//! [`CameraMatrices::model_view_projection`](crate::camera::CameraMatrices::model_view_projection).

use glam::{DMat4, DVec3, DVec4};

/// Scale, XY shear and Z rotation applied to the model, in that order of
/// matrix multiplication (`scale * shear * rotation`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    /// Per-axis scale factors.
    pub scale: DVec3,
    /// Amount of y added to x (`x' = x + shear_xy * y`).
    pub shear_xy: f64,
    /// Clockwise rotation about +Z in radians.
    pub rotation_z: f64,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            scale: DVec3::ONE,
            shear_xy: 0.0,
            rotation_z: 0.0,
        }
    }
}

impl ModelTransform {
    /// The viewer's demo transform: stretched on x, sheared, rotated by
    /// `angle`.
    #[must_use]
    pub fn demo(angle: f64) -> Self {
        Self {
            scale: DVec3::new(1.2, 1.0, 1.0),
            shear_xy: 0.5,
            rotation_z: angle,
        }
    }

    /// Shear matrix placing `shear_xy` at column 1, row 0.
    #[must_use]
    pub fn shear_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            DVec4::X,
            DVec4::new(self.shear_xy, 1.0, 0.0, 0.0),
            DVec4::Z,
            DVec4::W,
        )
    }

    /// Rotation matrix for `rotation_z`.
    #[must_use]
    pub fn rotation_matrix(&self) -> DMat4 {
        let (s, c) = self.rotation_z.sin_cos();
        DMat4::from_cols(
            DVec4::new(c, -s, 0.0, 0.0),
            DVec4::new(s, c, 0.0, 0.0),
            DVec4::Z,
            DVec4::W,
        )
    }

    /// Combined model matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale(self.scale) * self.shear_matrix() * self.rotation_matrix()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(ModelTransform::default().matrix(), DMat4::IDENTITY);
    }

    #[test]
    fn shear_adds_y_to_x() {
        let t = ModelTransform {
            shear_xy: 0.5,
            ..ModelTransform::default()
        };
        let p = t.matrix().transform_point3(DVec3::new(0.0, 2.0, 0.0));
        assert!(p.abs_diff_eq(DVec3::new(1.0, 2.0, 0.0), 1e-12));
    }

    #[test]
    fn rotation_is_clockwise_about_z() {
        let t = ModelTransform {
            rotation_z: FRAC_PI_2,
            ..ModelTransform::default()
        };
        let p = t.matrix().transform_point3(DVec3::X);
        assert!(p.abs_diff_eq(-DVec3::Y, 1e-12), "{p}");
        assert!(t.rotation_matrix().abs_diff_eq(
            DMat4::from_rotation_z(-FRAC_PI_2),
            1e-12
        ));
    }

    #[test]
    fn demo_applies_rotation_then_shear_then_scale() {
        let t = ModelTransform::demo(FRAC_PI_2);
        // X rotates to -Y, shear moves it to (-0.5, -1), scale stretches x.
        let p = t.matrix().transform_point3(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::new(-0.6, -1.0, 0.0), 1e-12), "{p}");
    }
}
