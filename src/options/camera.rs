use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{ClipDepth, ProjectionKind, ViewExtent};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and projection parameters.
pub struct CameraOptions {
    /// Eye position in world space.
    #[schemars(title = "Eye")]
    pub eye: [f64; 3],
    /// Look-at target.
    #[schemars(title = "Target")]
    pub target: [f64; 3],
    /// Up direction.
    #[schemars(skip)]
    pub up: [f64; 3],
    /// Perspective or orthographic.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Widen the extent to match the viewport aspect ratio.
    #[schemars(title = "Preserve Aspect")]
    pub preserve_aspect: bool,
    /// Depth convention of the emitted projection matrix.
    #[schemars(skip)]
    pub clip_depth: ClipDepth,
    /// View-volume bounds around the target.
    pub extent: ViewExtent,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [2.0, 2.0, 2.0],
            target: [0.0; 3],
            up: [0.0, 1.0, 0.0],
            projection: ProjectionKind::Perspective,
            preserve_aspect: true,
            clip_depth: ClipDepth::NegativeOneToOne,
            extent: ViewExtent::default(),
        }
    }
}
