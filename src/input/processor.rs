//! Routes raw platform events into camera controller calls.
//!
//! The `InputProcessor` tracks the cursor so a button press, which carries
//! no position of its own, can start an arcball drag at the right place.
//! It holds no reference to the controller; the host passes one in with
//! every event.

use super::event::{InputEvent, MouseButton};
use crate::camera::{CameraController, Viewport};

/// Converts raw window events into [`CameraController`] calls.
///
/// Only the left button drives the arcball.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if input_processor.handle_event(&mut controller, event) {
///     window.request_redraw();
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels, `None` until the
    /// first cursor event.
    cursor: Option<(f64, f64)>,
}

impl InputProcessor {
    /// Create a new processor with no known cursor position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Process a raw input event.
    ///
    /// Returns `true` when the event touched the controller in a way that
    /// warrants a redraw.
    pub fn handle_event(
        &mut self,
        controller: &mut CameraController,
        event: InputEvent,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some((x, y));
                if !controller.is_dragging() {
                    return false;
                }
                controller.on_pointer_move(x, y);
                true
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed {
                    // A press with no known position has no drag origin.
                    let Some((x, y)) = self.cursor else {
                        return false;
                    };
                    controller.on_pointer_down(x, y);
                    return true;
                }
                let was_dragging = controller.is_dragging();
                controller.on_pointer_up();
                was_dragging
            }
            InputEvent::MouseButton { .. } => false,
            InputEvent::Resized { width, height } => {
                controller.resize(Viewport::clamped(width, height));
                true
            }
        }
    }
}
