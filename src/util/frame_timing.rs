//! Frame timing for host loops: capped per-frame deltas and smoothed FPS.

use web_time::{Duration, Instant};

/// Per-frame delta source for host loops driving
/// [`Carousel::advance`](crate::carousel::Carousel::advance).
///
/// Measures the wall time between frames, caps pathological deltas (window
/// drags, debugger pauses) and keeps a smoothed FPS for display.
#[derive(Debug)]
pub struct FrameClock {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Largest delta handed out by [`tick`](Self::tick)
    max_delta: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            max_delta: Duration::from_millis(100),
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the delta cap (default 100ms).
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Minimum wall time between frames for the FPS target.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        self.min_frame_duration
    }

    /// Returns true if enough time has passed since the last tick to run a
    /// frame.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Close the current frame and return its (capped) delta.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> Duration {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
