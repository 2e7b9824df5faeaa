//! Time-based camera animation.
//!
//! The only animation in the scene is the intro fly-in: a camera move
//! driven by wall-clock time rather than frame count, so it takes the same
//! time at 30 Hz as at 144 Hz.

pub mod transition;

pub use transition::{TransitionState, TransitionTick};
