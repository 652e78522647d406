//! Standalone viewer window backed by winit.
//!
//! The viewer owns the window, the [`CameraController`] and an
//! [`InputProcessor`]. Rendering is delegated: every redraw hands the
//! frame's matrices to a [`FrameSink`], which is where a graphics backend
//! plugs in.
//!
//! ```no_run
//! # use arcview::Viewer;
//! Viewer::builder()
//!     .with_title("Cube")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use glam::DMat4;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    camera::{CameraController, CameraMatrices, Viewport},
    error::ArcviewError,
    input::{InputEvent, InputProcessor, MouseButton},
    options::{Options, ViewerOptions},
    transform::ModelTransform,
};

// ── Render seam ──────────────────────────────────────────────────────────

/// Everything a render backend needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Camera projection and view.
    pub matrices: CameraMatrices,
    /// Model matrix for the frame.
    pub model: DMat4,
    /// Surface the frame targets.
    pub viewport: Viewport,
}

/// Consumer of per-frame camera output.
pub trait FrameSink {
    /// Draw (or otherwise consume) one frame.
    fn draw(&mut self, frame: &Frame);

    /// The output surface changed size.
    fn resize(&mut self, _viewport: Viewport) {}
}

/// Sink that logs each frame's matrices at trace level.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    /// Number of frames received so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for LogSink {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        log::trace!(
            "frame {} {}x{}: projection={:?} view={:?}",
            self.frames,
            frame.viewport.width(),
            frame.viewport.height(),
            frame.matrices.projection_cols(),
            frame.matrices.view_cols(),
        );
    }

    fn resize(&mut self, viewport: Viewport) {
        log::debug!("surface resized to {}x{}", viewport.width(), viewport.height());
    }
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    sink: Option<Box<dyn FrameSink>>,
}

impl ViewerBuilder {
    /// Create a builder with default options and a [`LogSink`].
    fn new() -> Self {
        Self {
            options: Options::default(),
            sink: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.viewer.title = title.into();
        self
    }

    /// Route frames to `sink` instead of the logging sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl FrameSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            sink: self
                .sink
                .unwrap_or_else(|| Box::new(LogSink::default())),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving an arcball camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    sink: Box<dyn FrameSink>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Validate the options, open the window and run the event loop.
    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), ArcviewError> {
        self.options.validate()?;

        let event_loop =
            EventLoop::new().map_err(|e| ArcviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(control_flow(&self.options.viewer));

        let mut app = ViewerApp {
            window: None,
            controller: None,
            input: InputProcessor::new(),
            options: self.options,
            sink: self.sink,
            started: Instant::now(),
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ArcviewError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    controller: Option<CameraController>,
    input: InputProcessor,
    options: Options,
    sink: Box<dyn FrameSink>,
    started: Instant,
    error: Option<ArcviewError>,
}

/// Only a spinning model redraws continuously; otherwise the loop sleeps
/// until input arrives.
fn control_flow(options: &ViewerOptions) -> ControlFlow {
    if options.spin_model {
        ControlFlow::Poll
    } else {
        ControlFlow::Wait
    }
}

/// Viewport for a window's inner size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> Viewport {
    Viewport::clamped(inner.width, inner.height)
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ArcviewError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        let model = if self.options.viewer.spin_model {
            ModelTransform::demo(self.started.elapsed().as_secs_f64()).matrix()
        } else {
            DMat4::IDENTITY
        };
        self.sink.draw(&Frame {
            matrices: controller.matrices(),
            model,
            viewport: controller.viewport(),
        });
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.options.viewer.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.viewer.width,
                self.options.viewer.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, ArcviewError::Viewer(e.to_string()));
                return;
            }
        };

        let viewport = viewport_size(window.inner_size());
        let controller =
            match CameraController::from_options(&self.options, viewport) {
                Ok(c) => c,
                Err(e) => {
                    self.fail(event_loop, e);
                    return;
                }
            };
        log::info!(
            "viewer started at {}x{} ({:?})",
            viewport.width(),
            viewport.height(),
            controller.camera.projection,
        );
        self.sink.resize(viewport);

        window.request_redraw();
        self.window = Some(window);
        self.controller = Some(controller);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let input_event = match event {
            WindowEvent::RedrawRequested => {
                self.redraw();
                if self.options.viewer.spin_model {
                    self.request_redraw();
                }
                return;
            }
            WindowEvent::Resized(size) => {
                let viewport = viewport_size(size);
                self.sink.resize(viewport);
                InputEvent::Resized {
                    width: viewport.width(),
                    height: viewport.height(),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                }
            }
            _ => return,
        };

        let Some(controller) = &mut self.controller else {
            return;
        };
        if self.input.handle_event(controller, input_event) {
            self.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;

    #[test]
    fn log_sink_counts_frames() {
        let viewport = Viewport::new(800, 600).unwrap();
        let controller = CameraController::new(Camera::default(), viewport);
        let frame = Frame {
            matrices: controller.matrices(),
            model: DMat4::IDENTITY,
            viewport,
        };
        let mut sink = LogSink::default();
        sink.draw(&frame);
        sink.draw(&frame);
        assert_eq!(sink.frames(), 2);
    }

    #[test]
    fn builder_carries_title_into_options() {
        let viewer = Viewer::builder().with_title("Cube").build();
        assert_eq!(viewer.options.viewer.title, "Cube");
        assert!(viewer.options.validate().is_ok());
    }

    #[test]
    fn event_loop_waits_unless_spinning() {
        let mut options = ViewerOptions::default();
        assert_eq!(control_flow(&options), ControlFlow::Wait);
        options.spin_model = true;
        assert_eq!(control_flow(&options), ControlFlow::Poll);
    }
}
