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

//! Interactive 3D scene controller.
//!
//! Vitrine drives a small showcase scene: a loaded model plus a labeled
//! cube that navigates to a link when clicked. It owns the parts of such a
//! page that carry real temporal or geometric logic, and leaves drawing to
//! a host-provided [`engine::RenderSurface`].
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - the render loop coordinator
//! - [`camera::OrbitController`] - damped, clamped orbit camera control
//! - [`animation::TransitionState`] - wall-clock camera fly-in
//! - [`picking::Raycaster`] - pointer to scene-object hit resolution
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame model
//!
//! Everything runs on one logical thread. The host calls
//! [`engine::SceneEngine::tick`] once per display refresh and schedules the
//! next frame only while it returns [`engine::FrameStatus::Continue`].
//! Input and resize events are executed between frames as
//! [`engine::SceneCommand`]s, so their mutations are always visible to the
//! next rendered frame.
//!
//! With the `web` feature, `web::mount` wires all of this to a browser
//! canvas.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{FrameStatus, LoadState, SceneCommand, SceneEngine};
pub use error::VitrineError;
pub use input::{InputEvent, InputProcessor, MouseButton};
