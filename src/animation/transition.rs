//! Wall-clock camera transition.
//!
//! A [`TransitionState`] is a plain value: each frame the owner hands it to
//! [`TransitionState::tick`] together with the current time and gets back
//! the camera position plus, while unfinished, the advanced state. Once
//! the transition reports [`TransitionTick::Finished`] there is nothing
//! left to hold on to, so it cannot be replayed by accident.

use glam::Vec3;
use web_time::Instant;

use crate::util::easing::EasingFunction;

/// Progress of a camera move from a start to an end position over a fixed
/// wall-clock duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    start: Vec3,
    end: Vec3,
    duration_ms: f64,
    easing: EasingFunction,
    /// Captured on the first tick.
    started_at: Option<Instant>,
    progress: f32,
}

/// Outcome of advancing a transition by one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionTick {
    /// Still moving; keep `state` for the next frame.
    Running {
        /// Camera position for this frame.
        position: Vec3,
        /// Advanced state.
        state: TransitionState,
    },
    /// Reached the end; `position` equals the end point exactly.
    Finished {
        /// Camera position for this frame.
        position: Vec3,
    },
}

impl TransitionTick {
    /// Camera position for this frame.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        match self {
            Self::Running { position, .. } | Self::Finished { position } => {
                *position
            }
        }
    }
}

impl TransitionState {
    /// Linear move from `start` to `end` over `duration_ms` milliseconds.
    ///
    /// A duration that is zero, negative, or NaN completes on the first
    /// tick.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            easing: EasingFunction::Linear,
            started_at: None,
            progress: 0.0,
        }
    }

    /// Shape progress with `easing` instead of moving linearly.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Start position.
    #[must_use]
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// End position.
    #[must_use]
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Progress reached by the last tick, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Time of the first tick, if one has happened.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Progress at `now` for a transition started at `started_at`.
    fn progress_since(&self, started_at: Instant, now: Instant) -> f32 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed_ms =
            now.saturating_duration_since(started_at).as_secs_f64() * 1000.0;
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Camera position at a given linear progress.
    #[must_use]
    pub fn position_at(&self, progress: f32) -> Vec3 {
        if progress >= 1.0 {
            return self.end;
        }
        self.start.lerp(self.end, self.easing.evaluate(progress))
    }

    /// Advance to `now`. The first call records `now` as the start time.
    #[must_use]
    pub fn tick(mut self, now: Instant) -> TransitionTick {
        let started_at = *self.started_at.get_or_insert(now);
        // Progress never moves backwards, even if the clock does.
        self.progress = self.progress_since(started_at, now).max(self.progress);
        let position = self.position_at(self.progress);

        if self.progress >= 1.0 {
            log::debug!("camera transition finished at {position}");
            TransitionTick::Finished { position }
        } else {
            TransitionTick::Running {
                position,
                state: self,
            }
        }
    }
}
