//! Frame timing for the render loop.

use web_time::Instant;

/// Smoothed frames-per-second tracking for the render loop.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the last rendered frame, unset until the first one.
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a timer with a 60 FPS starting estimate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Record a rendered frame at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        self.frames += 1;
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };

        let frame_time = now.saturating_duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Total frames recorded.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[test]
    fn first_frame_only_counts() {
        let mut timing = FrameTiming::new();
        timing.end_frame(Instant::now());
        assert_eq!(timing.frames(), 1);
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn slow_frames_pull_the_average_down() {
        let mut timing = FrameTiming::new();
        let mut now = Instant::now();
        for _ in 0..200 {
            timing.end_frame(now);
            now += Duration::from_millis(100);
        }
        assert!(timing.fps() < 15.0, "fps = {}", timing.fps());
        assert!(timing.fps() > 9.0, "fps = {}", timing.fps());
    }
}
