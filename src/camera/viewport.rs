use glam::DVec2;

use crate::error::ArcviewError;

/// Output surface size in physical pixels.
///
/// Both dimensions are non-zero; [`Viewport::new`] rejects anything else so
/// the per-frame math never divides by a zero width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ArcviewError> {
        if width == 0 || height == 0 {
            return Err(ArcviewError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Create a viewport from a window-system size, clamping each dimension
    /// to at least one pixel (minimised windows report `0x0`).
    #[must_use]
    pub fn clamped(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Pixel-space center of the surface.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Viewport::new(0, 600).is_err());
        assert!(Viewport::new(800, 0).is_err());
        assert!(Viewport::new(800, 600).is_ok());
    }

    #[test]
    fn clamped_never_produces_zero() {
        let vp = Viewport::clamped(0, 0);
        assert_eq!((vp.width(), vp.height()), (1, 1));
    }

    #[test]
    fn center_and_aspect() {
        let vp = Viewport::new(800, 600).unwrap();
        assert_eq!(vp.center(), DVec2::new(400.0, 300.0));
        assert!((vp.aspect() - 4.0 / 3.0).abs() < 1e-12);
    }
}
