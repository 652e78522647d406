//! View-volume bounds.
//!
//! The extent describes the world-space window the camera frames around its
//! target: x/y bounds become the visible window, z bounds are offsets from
//! the target along the view axis that become the depth planes once the
//! eye-to-target distance is known.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::viewport::Viewport;
use crate::error::ArcviewError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Extent", inline)]
#[serde(default)]
/// Independent min/max bounds on three axes.
pub struct ViewExtent {
    /// Left edge of the visible window.
    pub x_min: f64,
    /// Right edge of the visible window.
    pub x_max: f64,
    /// Bottom edge of the visible window.
    pub y_min: f64,
    /// Top edge of the visible window.
    pub y_max: f64,
    /// Farthest depth offset behind the target.
    pub z_min: f64,
    /// Nearest depth offset in front of the target.
    pub z_max: f64,
}

impl Default for ViewExtent {
    fn default() -> Self {
        Self::new(-5.0, 5.0, -5.0, 5.0, -10.0, 10.0)
    }
}

impl ViewExtent {
    /// Build an extent from explicit bounds. No validation is performed.
    #[must_use]
    pub const fn new(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
        }
    }

    /// Symmetric extent: `±limit` on x and y, `±2·limit` on z.
    #[must_use]
    pub fn uniform(limit: f64) -> Self {
        Self::new(-limit, limit, -limit, limit, -2.0 * limit, 2.0 * limit)
    }

    /// `x_max - x_min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// `y_max - y_min`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check every bound is finite and each `min < max`.
    pub fn validate(&self) -> Result<(), ArcviewError> {
        let axes = [
            ("x", self.x_min, self.x_max),
            ("y", self.y_min, self.y_max),
            ("z", self.z_min, self.z_max),
        ];
        for (axis, min, max) in axes {
            if !min.is_finite() || !max.is_finite() {
                return Err(ArcviewError::InvalidExtent(format!(
                    "{axis} bounds must be finite, got [{min}, {max}]"
                )));
            }
            if min >= max {
                return Err(ArcviewError::InvalidExtent(format!(
                    "{axis}_min ({min}) must be less than {axis}_max ({max})"
                )));
            }
        }
        Ok(())
    }

    /// Widen the x or y bounds so the window has the viewport's aspect
    /// ratio.
    ///
    /// Bounds only ever grow: the axis that is too narrow for the viewport
    /// is widened symmetrically about its center, the other axis and the z
    /// bounds are untouched.
    #[must_use]
    pub fn fit_aspect(&self, viewport: Viewport) -> Self {
        let aspect = f64::from(viewport.height()) / f64::from(viewport.width());
        let desired = self.height() / self.width();
        let mut fitted = *self;

        if desired > aspect {
            let extra = ((desired / aspect) - 1.0) * self.width() / 2.0;
            fitted.x_min -= extra;
            fitted.x_max += extra;
        } else {
            let extra = ((aspect / desired) - 1.0) * self.height() / 2.0;
            fitted.y_min -= extra;
            fitted.y_max += extra;
        }
        fitted
    }
}
