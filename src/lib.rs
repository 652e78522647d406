// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D viewer camera with arcball rotation.
//!
//! Arcview derives projection and view matrices from an eye, a target, an
//! up vector and a view-volume extent, and turns pointer drags into
//! orbits of the eye around the target.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - camera state and per-frame matrix derivation
//! - [`camera::CameraController`] - arcball drag handling on top of a camera
//! - [`input::InputProcessor`] - routes platform events to the controller
//! - [`options::Options`] - TOML-backed configuration, validated on load
//!
//! # Architecture
//!
//! The host owns a [`camera::CameraController`] and feeds it pointer events
//! from its event loop. Each frame it asks the controller for
//! [`camera::CameraMatrices`] and hands them to its render backend, which
//! composes them with its own model matrix. Matrices cross the backend
//! boundary as column-major `[f32; 16]` arrays or a
//! [`camera::CameraUniform`].
//!
//! With the `viewer` feature, [`Viewer`] wires all of this into a winit
//! window and delegates drawing to a [`viewer::FrameSink`].

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod transform;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraController, CameraMatrices, Viewport};
pub use error::ArcviewError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
