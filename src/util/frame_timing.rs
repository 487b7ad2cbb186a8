//! Frame clock for the per-frame navigation loop.

use web_time::{Duration, Instant};

/// Frame clock producing per-frame delta times for the walkthrough loop.
///
/// Deltas are capped so a stalled tab or a debugger pause does not make a
/// scripted transition jump straight to its end.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Largest delta ever reported
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Default cap on a single frame delta (a quarter second).
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(250);

    /// Create a clock that starts counting now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    /// Create a clock with a custom delta cap.
    #[must_use]
    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Mark the start of a frame and return the seconds since the previous
    /// one, capped at the configured maximum.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).min(self.max_delta);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
