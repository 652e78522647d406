use glam::{DMat4, DVec3, Mat4};

use super::extent::ViewExtent;
use super::projection::{ClipDepth, Projection, ProjectionKind};
use super::viewport::Viewport;
use crate::error::ArcviewError;
use crate::options::CameraOptions;

/// Camera defined by eye position, target, up vector and a view-volume
/// extent from which the projection is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: DVec3,
    /// Look-at target position.
    pub target: DVec3,
    /// Up direction vector.
    pub up: DVec3,
    /// Visible world-space window and depth offsets around the target.
    pub extent: ViewExtent,
    /// Widen the extent to the viewport aspect instead of stretching.
    pub preserve_aspect: bool,
    /// Perspective or orthographic.
    pub projection: ProjectionKind,
    /// Depth range of the emitted projection matrix.
    pub clip_depth: ClipDepth,
}

/// Projection and view matrices for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    /// Projection matrix.
    pub projection: DMat4,
    /// World-to-view matrix.
    pub view: DMat4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and eye position.
pub struct CameraUniform {
    /// Projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, 30.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            extent: ViewExtent::default(),
            preserve_aspect: true,
            projection: ProjectionKind::Perspective,
            clip_depth: ClipDepth::NegativeOneToOne,
        }
    }
}

impl Camera {
    /// Build a camera from options, validating extent and orientation.
    pub fn from_options(options: &CameraOptions) -> Result<Self, ArcviewError> {
        let camera = Self {
            eye: DVec3::from_array(options.eye),
            target: DVec3::from_array(options.target),
            up: DVec3::from_array(options.up),
            extent: options.extent,
            preserve_aspect: options.preserve_aspect,
            projection: options.projection,
            clip_depth: options.clip_depth,
        };
        camera.validate()?;
        Ok(camera)
    }

    /// Check the configuration produces finite, non-degenerate matrices.
    ///
    /// Meant for configuration boundaries; [`compute_matrices`] itself
    /// never validates.
    ///
    /// [`compute_matrices`]: Self::compute_matrices
    pub fn validate(&self) -> Result<(), ArcviewError> {
        self.extent.validate()?;

        if !self.eye.is_finite() || !self.target.is_finite() {
            return Err(ArcviewError::DegenerateView(
                "eye and target must be finite".into(),
            ));
        }
        let forward = self.target - self.eye;
        if forward.length_squared() == 0.0 {
            return Err(ArcviewError::DegenerateView(format!(
                "eye and target coincide at {}",
                self.eye
            )));
        }
        if !self.up.is_finite() || self.up.length_squared() == 0.0 {
            return Err(ArcviewError::DegenerateView(format!(
                "up vector {} is not a direction",
                self.up
            )));
        }
        if forward.cross(self.up).length_squared() == 0.0 {
            return Err(ArcviewError::DegenerateView(format!(
                "up vector {} is parallel to the view direction",
                self.up
            )));
        }
        Ok(())
    }

    /// Replace the view-volume bounds. No validation is performed.
    pub fn set_extent(
        &mut self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) {
        self.extent = ViewExtent::new(x_min, x_max, y_min, y_max, z_min, z_max);
    }

    /// Shorthand for `±limit` on x/y and `±2·limit` on z.
    pub fn set_uniform_scale(&mut self, limit: f64) {
        self.extent = ViewExtent::uniform(limit);
    }

    /// Overwrite eye, target and up. `up` is stored as given.
    pub fn look_at(&mut self, eye: DVec3, target: DVec3, up: DVec3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
    }

    /// Select perspective or orthographic projection.
    pub fn set_projection_kind(&mut self, kind: ProjectionKind) {
        log::debug!("projection kind -> {kind:?}");
        self.projection = kind;
    }

    /// Toggle aspect-preserving viewport fitting.
    pub fn set_preserve_aspect(&mut self, preserve: bool) {
        self.preserve_aspect = preserve;
    }

    /// Select the depth convention of the emitted projection matrix.
    pub fn set_clip_depth(&mut self, clip_depth: ClipDepth) {
        self.clip_depth = clip_depth;
    }

    /// Euclidean distance between eye and target.
    #[must_use]
    pub fn view_distance(&self) -> f64 {
        self.eye.distance(self.target)
    }

    /// The extent actually framed on `viewport`, after aspect fitting.
    #[must_use]
    pub fn effective_extent(&self, viewport: Viewport) -> ViewExtent {
        if self.preserve_aspect {
            self.extent.fit_aspect(viewport)
        } else {
            self.extent
        }
    }

    /// Derived projection parameters for `viewport`.
    #[must_use]
    pub fn projection_params(&self, viewport: Viewport) -> Projection {
        Projection::derive(
            self.projection,
            &self.effective_extent(viewport),
            self.view_distance(),
            viewport,
        )
    }

    /// Right-handed look-at view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection and view matrices for `viewport`, recomputed from scratch.
    #[must_use]
    pub fn compute_matrices(&self, viewport: Viewport) -> CameraMatrices {
        CameraMatrices {
            projection: self
                .projection_params(viewport)
                .to_matrix(self.clip_depth),
            view: self.view_matrix(),
        }
    }
}

impl CameraMatrices {
    /// Combined view-projection matrix (projection * view).
    #[must_use]
    pub fn view_projection(&self) -> DMat4 {
        self.projection * self.view
    }

    /// Full clip transform for a model matrix owned by the renderer.
    #[must_use]
    pub fn model_view_projection(&self, model: DMat4) -> DMat4 {
        self.projection * self.view * model
    }

    /// Projection as 16 column-major floats for GPU upload.
    #[must_use]
    pub fn projection_cols(&self) -> [f32; 16] {
        self.projection.as_mat4().to_cols_array()
    }

    /// View as 16 column-major floats for GPU upload.
    #[must_use]
    pub fn view_cols(&self) -> [f32; 16] {
        self.view.as_mat4().to_cols_array()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from a camera and its matrices for this frame.
    pub fn update(&mut self, camera: &Camera, matrices: &CameraMatrices) {
        self.projection = matrices.projection.as_mat4().to_cols_array_2d();
        self.view = matrices.view.as_mat4().to_cols_array_2d();
        self.position = camera.eye.as_vec3().to_array();
    }
}
