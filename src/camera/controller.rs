use glam::DVec3;

use crate::camera::arcball::{self, Arcball};
use crate::camera::core::{Camera, CameraMatrices};
use crate::camera::viewport::Viewport;
use crate::error::ArcviewError;
use crate::options::Options;

/// Arcball camera controller.
///
/// Owns the [`Camera`], the viewport the pointer coordinates refer to and
/// the transient drag state. The host's input layer holds the controller
/// and calls the pointer methods directly.
pub struct CameraController {
    /// The controlled camera.
    pub camera: Camera,
    viewport: Viewport,
    arcball: Arcball,
    /// Last arcball sample while a drag is active, `None` otherwise.
    drag_point: Option<DVec3>,
}

impl CameraController {
    /// Create a controller for `camera` rendering into `viewport`.
    #[must_use]
    pub fn new(camera: Camera, viewport: Viewport) -> Self {
        Self {
            camera,
            viewport,
            arcball: Arcball::default(),
            drag_point: None,
        }
    }

    /// Build a validated controller from options.
    pub fn from_options(
        options: &Options,
        viewport: Viewport,
    ) -> Result<Self, ArcviewError> {
        let camera = options.build_camera()?;
        Ok(Self::new(camera, viewport)
            .with_arcball(Arcball::new(options.interaction.arcball_radius)))
    }

    /// Replace the arcball projection parameters.
    #[must_use]
    pub fn with_arcball(mut self, arcball: Arcball) -> Self {
        self.arcball = arcball;
        self
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Arcball projection parameters.
    #[must_use]
    pub fn arcball(&self) -> &Arcball {
        &self.arcball
    }

    /// Update the viewport after the output surface was resized.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_point.is_some()
    }

    /// Projection and view matrices for the current viewport.
    #[must_use]
    pub fn matrices(&self) -> CameraMatrices {
        self.camera.compute_matrices(self.viewport)
    }

    /// Map a pointer position to a unit arcball vector for the current
    /// viewport.
    #[must_use]
    pub fn screen_to_arcball(&self, x: f64, y: f64) -> DVec3 {
        self.arcball.project(x, y, self.viewport)
    }

    /// Start a drag at pointer position `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        log::debug!("arcball drag start at ({x}, {y})");
        self.drag_point = Some(self.screen_to_arcball(x, y));
    }

    /// Rotate incrementally from the previous sample to `(x, y)`.
    ///
    /// Does nothing unless a drag is in progress.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let Some(previous) = self.drag_point else {
            return;
        };
        let current = self.screen_to_arcball(x, y);
        self.apply_arcball_rotation(previous, current);
        self.drag_point = Some(current);
    }

    /// End the drag.
    pub fn on_pointer_up(&mut self) {
        if self.drag_point.take().is_some() {
            log::debug!("arcball drag end");
        }
    }

    /// Orbit the eye about the target by the rotation carrying `from` onto
    /// `to`, reorienting `up` with it.
    ///
    /// Nearly parallel vectors are ignored. The eye-to-target distance is
    /// preserved by the rotation; `up` is renormalized every call.
    pub fn apply_arcball_rotation(&mut self, from: DVec3, to: DVec3) {
        let Some(rotation) = arcball::rotation_between(from, to) else {
            return;
        };
        log::trace!("arcball rotation {rotation}");

        let offset = self.camera.eye - self.camera.target;
        self.camera.eye = self.camera.target + rotation * offset;
        self.camera.up = (rotation * self.camera.up).normalize();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn controller() -> CameraController {
        let mut camera = Camera::default();
        camera.look_at(DVec3::new(2.0, 2.0, 2.0), DVec3::ZERO, DVec3::Y);
        CameraController::new(camera, Viewport::new(800, 600).unwrap())
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut ctrl = controller();
        let before = ctrl.camera.clone();
        ctrl.on_pointer_move(100.0, 100.0);
        assert_eq!(ctrl.camera, before);
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn repeated_identical_moves_change_nothing() {
        let mut ctrl = controller();
        ctrl.on_pointer_down(400.0, 300.0);
        ctrl.on_pointer_move(450.0, 320.0);
        let after_first = ctrl.camera.clone();
        ctrl.on_pointer_move(450.0, 320.0);
        assert_eq!(ctrl.camera.eye, after_first.eye);
        assert_eq!(ctrl.camera.up, after_first.up);
    }

    #[test]
    fn drag_out_and_back_restores_orientation() {
        let mut ctrl = controller();
        let (eye, up) = (ctrl.camera.eye, ctrl.camera.up);

        ctrl.on_pointer_down(380.0, 290.0);
        ctrl.on_pointer_move(520.0, 180.0);
        assert!(!ctrl.camera.eye.abs_diff_eq(eye, 1e-3));
        ctrl.on_pointer_move(380.0, 290.0);
        ctrl.on_pointer_up();

        assert!(ctrl.camera.eye.abs_diff_eq(eye, 1e-9), "{}", ctrl.camera.eye);
        assert!(ctrl.camera.up.abs_diff_eq(up, 1e-9), "{}", ctrl.camera.up);
    }

    #[test]
    fn drag_at_same_point_is_a_no_op() {
        let mut ctrl = controller();
        let before = ctrl.camera.clone();
        ctrl.on_pointer_down(123.0, 456.0);
        ctrl.on_pointer_move(123.0, 456.0);
        ctrl.on_pointer_up();
        assert_eq!(ctrl.camera, before);
    }

    #[test]
    fn rotation_preserves_view_distance_and_unit_up() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut ctrl = controller();
        ctrl.camera.target = DVec3::new(1.0, -2.0, 0.5);
        let distance = ctrl.camera.view_distance();

        ctrl.on_pointer_down(400.0, 300.0);
        for _ in 0..500 {
            ctrl.on_pointer_move(
                rng.random_range(0.0..800.0),
                rng.random_range(0.0..600.0),
            );
            assert!((ctrl.camera.view_distance() - distance).abs() < 1e-9);
            assert!((ctrl.camera.up.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn horizontal_drag_orbits_about_view_up() {
        let mut ctrl = CameraController::new(
            Camera::default(),
            Viewport::new(800, 600).unwrap(),
        );
        ctrl.on_pointer_down(400.0, 300.0);
        ctrl.on_pointer_move(460.0, 300.0);

        // Pure horizontal motion keeps the eye in the y = 0 plane and leaves
        // up untouched.
        assert!(ctrl.camera.eye.y.abs() < 1e-12);
        assert!(ctrl.camera.up.abs_diff_eq(DVec3::Y, 1e-12));
        assert!(ctrl.camera.eye.x.abs() > 1.0);
    }

    #[test]
    fn pointer_up_clears_drag_state() {
        let mut ctrl = controller();
        ctrl.on_pointer_down(10.0, 10.0);
        assert!(ctrl.is_dragging());
        ctrl.on_pointer_up();
        assert!(!ctrl.is_dragging());

        let before = ctrl.camera.clone();
        ctrl.on_pointer_move(700.0, 500.0);
        assert_eq!(ctrl.camera, before);
    }

    #[test]
    fn from_options_rejects_bad_configuration() {
        let mut options = Options::default();
        options.camera.target = options.camera.eye;
        let vp = Viewport::new(800, 600).unwrap();
        assert!(CameraController::from_options(&options, vp).is_err());

        let ctrl =
            CameraController::from_options(&Options::default(), vp).unwrap();
        assert_eq!(ctrl.camera.eye, DVec3::new(2.0, 2.0, 2.0));
        assert_eq!(ctrl.arcball().radius_fraction(), 0.8);
    }
}
