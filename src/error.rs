//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcview crate.
///
/// Only configuration and I/O boundaries return these. Per-frame matrix
/// derivation and pointer handling never fail; they assume the camera was
/// validated when it was built.
#[derive(Debug)]
pub enum ArcviewError {
    /// A view-volume bound is non-finite or a `min >= max` pair was given.
    InvalidExtent(String),
    /// Eye, target and up do not define a usable view direction.
    DegenerateView(String),
    /// Viewport with a zero dimension.
    InvalidViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// An option value outside its accepted range.
    InvalidOption(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for ArcviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent(msg) => write!(f, "invalid extent: {msg}"),
            Self::DegenerateView(msg) => {
                write!(f, "degenerate view: {msg}")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport: {width}x{height}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ArcviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_viewport_dimensions() {
        let err = ArcviewError::InvalidViewport {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "invalid viewport: 0x600");
    }

    #[test]
    fn io_errors_expose_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ArcviewError::from(io);
        assert!(err.source().is_some());
        assert!(ArcviewError::InvalidOption("x".into()).source().is_none());
    }
}
