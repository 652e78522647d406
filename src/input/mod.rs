//! Input handling: platform-agnostic event types and the processor that
//! routes them into a [`CameraController`](crate::camera::CameraController).

/// Platform-agnostic input events.
pub mod event;
/// Routes raw events into camera controller calls.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
