//! Projection parameters derived from an extent and view distance.

use glam::DMat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::extent::ViewExtent;
use super::viewport::Viewport;

/// Hard floor for the perspective near plane.
pub const MIN_PERSPECTIVE_NEAR: f64 = 0.1;

/// Which projection the camera builds.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Field of view framed to the extent at the target distance.
    #[default]
    Perspective,
    /// Parallel projection of the extent window.
    Orthographic,
}

/// Normalized-device depth range the projection maps `[near, far]` onto.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ClipDepth {
    /// `[-1, 1]`, the OpenGL convention.
    #[default]
    NegativeOneToOne,
    /// `[0, 1]`, the wgpu/Vulkan/Metal convention.
    ZeroToOne,
}

/// Fully resolved projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective frustum.
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f64,
        /// Width over height.
        aspect: f64,
        /// Near plane distance.
        near: f64,
        /// Far plane distance.
        far: f64,
    },
    /// Orthographic box.
    Orthographic {
        /// Left window edge.
        left: f64,
        /// Right window edge.
        right: f64,
        /// Bottom window edge.
        bottom: f64,
        /// Top window edge.
        top: f64,
        /// Near plane distance (may be negative).
        near: f64,
        /// Far plane distance.
        far: f64,
    },
}

impl Projection {
    /// Derive the projection for `kind` from an already aspect-fitted
    /// extent.
    ///
    /// The perspective field of view is coupled to the extent and the
    /// eye-to-target distance, so zooming happens by moving the eye. Its
    /// near plane is floored at [`MIN_PERSPECTIVE_NEAR`]; the orthographic
    /// near/far are passed through unclamped.
    #[must_use]
    pub fn derive(
        kind: ProjectionKind,
        extent: &ViewExtent,
        view_distance: f64,
        viewport: Viewport,
    ) -> Self {
        let near = view_distance - extent.z_max;
        let far = view_distance - extent.z_min;

        match kind {
            ProjectionKind::Orthographic => Self::Orthographic {
                left: extent.x_min,
                right: extent.x_max,
                bottom: extent.y_min,
                top: extent.y_max,
                near,
                far,
            },
            ProjectionKind::Perspective => Self::Perspective {
                fov_y: 2.0 * (extent.height() / (2.0 * view_distance)).atan(),
                aspect: viewport.aspect(),
                near: near.max(MIN_PERSPECTIVE_NEAR),
                far,
            },
        }
    }

    /// Near plane distance.
    #[must_use]
    pub fn near(&self) -> f64 {
        match *self {
            Self::Perspective { near, .. } | Self::Orthographic { near, .. } => {
                near
            }
        }
    }

    /// Far plane distance.
    #[must_use]
    pub fn far(&self) -> f64 {
        match *self {
            Self::Perspective { far, .. } | Self::Orthographic { far, .. } => {
                far
            }
        }
    }

    /// Right-handed projection matrix for the given depth convention.
    #[must_use]
    pub fn to_matrix(&self, clip_depth: ClipDepth) -> DMat4 {
        match (*self, clip_depth) {
            (
                Self::Perspective {
                    fov_y,
                    aspect,
                    near,
                    far,
                },
                ClipDepth::NegativeOneToOne,
            ) => DMat4::perspective_rh_gl(fov_y, aspect, near, far),
            (
                Self::Perspective {
                    fov_y,
                    aspect,
                    near,
                    far,
                },
                ClipDepth::ZeroToOne,
            ) => DMat4::perspective_rh(fov_y, aspect, near, far),
            (
                Self::Orthographic {
                    left,
                    right,
                    bottom,
                    top,
                    near,
                    far,
                },
                ClipDepth::NegativeOneToOne,
            ) => DMat4::orthographic_rh_gl(left, right, bottom, top, near, far),
            (
                Self::Orthographic {
                    left,
                    right,
                    bottom,
                    top,
                    near,
                    far,
                },
                ClipDepth::ZeroToOne,
            ) => DMat4::orthographic_rh(left, right, bottom, top, near, far),
        }
    }
}
