//! Camera system for the showcase scene.
//!
//! Provides a perspective camera with a cached projection, validated orbit
//! bounds, and an orbit controller with damping and clamping.

/// Validated distance / polar bounds and damping settings.
pub mod constraints;
/// Damped orbit controller driving the camera around its target.
pub mod controller;
/// Core camera struct.
pub mod core;

pub use constraints::OrbitConstraints;
pub use controller::OrbitController;
pub use self::core::Camera;
