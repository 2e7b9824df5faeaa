use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::TransitionState;
use crate::util::easing::EasingFunction;

/// The camera fly-in played when the scene mounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Intro", inline)]
#[serde(default)]
pub struct IntroOptions {
    /// Play the fly-in; when off the camera starts at `end`.
    #[schemars(title = "Play Intro")]
    pub enabled: bool,
    /// Camera position when the fly-in starts.
    #[schemars(skip)]
    pub start: [f32; 3],
    /// Camera position when the fly-in ends.
    #[schemars(skip)]
    pub end: [f32; 3],
    /// Fly-in length in milliseconds. Zero or less snaps immediately.
    #[schemars(title = "Duration (ms)", range(min = 0.0, max = 10000.0), extend("step" = 100.0))]
    pub duration_ms: f64,
    /// Progress curve.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for IntroOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            start: [0.0, 8.0, 6.0],
            end: [0.0, 3.0, 5.0],
            duration_ms: 2000.0,
            easing: EasingFunction::Linear,
        }
    }
}

impl IntroOptions {
    /// Where the camera is placed on mount.
    #[must_use]
    pub fn initial_eye(&self) -> Vec3 {
        if self.enabled {
            Vec3::from(self.start)
        } else {
            Vec3::from(self.end)
        }
    }

    /// A fresh transition, or `None` when the intro is disabled.
    #[must_use]
    pub fn transition(&self) -> Option<TransitionState> {
        self.enabled.then(|| {
            TransitionState::new(
                Vec3::from(self.start),
                Vec3::from(self.end),
                self.duration_ms,
            )
            .with_easing(self.easing)
        })
    }
}
