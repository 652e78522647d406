//! Arcball mapping from pointer positions to 3D rotations.
//!
//! A virtual ball is centered on the viewport. Pointer positions inside it
//! are lifted onto the hemisphere facing the viewer; positions on or
//! outside its rim land on the equator, so dragging around the periphery
//! rolls the view about its axis.

use glam::{DQuat, DVec3};

use super::viewport::Viewport;

/// Ball radius as a fraction of the smaller half-dimension of the viewport.
pub const DEFAULT_RADIUS_FRACTION: f64 = 0.8;

/// Below this cross-product length two arcball vectors are treated as
/// parallel and produce no rotation.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// Screen-to-sphere projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arcball {
    radius_fraction: f64,
}

impl Default for Arcball {
    fn default() -> Self {
        Self {
            radius_fraction: DEFAULT_RADIUS_FRACTION,
        }
    }
}

impl Arcball {
    /// Create an arcball whose radius is `radius_fraction` of the smaller
    /// half-dimension of the viewport.
    #[must_use]
    pub fn new(radius_fraction: f64) -> Self {
        Self { radius_fraction }
    }

    /// Radius as a fraction of the smaller viewport half-dimension.
    #[must_use]
    pub fn radius_fraction(&self) -> f64 {
        self.radius_fraction
    }

    /// Ball radius in pixels for `viewport`.
    #[must_use]
    pub fn radius(&self, viewport: Viewport) -> f64 {
        let center = viewport.center();
        self.radius_fraction * center.x.min(center.y)
    }

    /// Map a pointer position to a unit vector on the ball.
    ///
    /// Screen y grows downward, view y grows upward, so y is flipped.
    /// Components are rescaled by their largest magnitude before
    /// normalizing so far-off pointer positions cannot overflow.
    #[must_use]
    pub fn project(&self, x: f64, y: f64, viewport: Viewport) -> DVec3 {
        let center = viewport.center();
        let scale = self.radius(viewport);
        let dx = x - center.x;
        let dy = center.y - y;
        let len = (dx * dx + dy * dy).sqrt();
        let dz = if len >= scale {
            0.0
        } else {
            (scale * scale - dx * dx - dy * dy).sqrt()
        };
        let v = DVec3::new(dx, dy, dz);
        (v / v.abs().max_element()).normalize_or(DVec3::Z)
    }
}

/// Rotation carrying arcball vector `from` onto `to`.
///
/// Returns `None` when the vectors are (nearly) parallel, including the
/// common no-motion case `from == to`, where the rotation axis cannot be
/// normalized.
#[must_use]
pub fn rotation_between(from: DVec3, to: DVec3) -> Option<DQuat> {
    let axis = from.cross(to);
    if axis.length() < PARALLEL_EPSILON {
        return None;
    }
    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    Some(DQuat::from_axis_angle(axis.normalize(), angle))
}
