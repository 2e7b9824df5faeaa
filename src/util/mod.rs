//! Shared utilities: easing curves for transitions and frame timing for
//! the render loop.

pub mod easing;
pub mod frame_timing;
