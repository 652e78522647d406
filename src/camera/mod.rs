//! Camera system for 3D scene viewing.
//!
//! Provides an extent-driven camera with perspective/orthographic
//! projection, aspect-preserving viewport fitting and arcball rotation.

/// Screen-to-sphere mapping and rotation between arcball vectors.
pub mod arcball;
/// Arcball camera controller owning the camera and drag state.
pub mod controller;
/// Core camera struct, frame matrices and GPU uniform types.
pub mod core;
/// View-volume bounds and aspect fitting.
pub mod extent;
/// Projection kinds and derived projection parameters.
pub mod projection;
/// Output surface dimensions.
pub mod viewport;

pub use arcball::Arcball;
pub use controller::CameraController;
pub use self::core::{Camera, CameraMatrices, CameraUniform};
pub use extent::ViewExtent;
pub use projection::{ClipDepth, Projection, ProjectionKind};
pub use viewport::Viewport;
