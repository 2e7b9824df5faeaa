//! CPU ray picking.
//!
//! A pointer position is normalized to device coordinates, turned into a
//! world-space ray from the camera, and cast against every visible mesh in
//! the scene graph. Only the nearest hit decides whether the click
//! triggers an interactive object's action.

mod ray;
mod raycaster;
mod resolve;

pub use ray::{pointer_to_ndc, Ray};
pub use raycaster::{Hit, Raycaster};
pub use resolve::{resolve_nearest, resolve_pointer};
