//! Eased tween between two positions, advanced by frame deltas.

use std::time::Duration;

use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Moves a position from `start` to `end` over a fixed duration.
///
/// Time only advances through [`advance`](Self::advance); the tween never
/// reads a clock. Restarting while running overwrites start, end and
/// elapsed time: there is no queuing and no blending.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTransition {
    start: Vec3,
    end: Vec3,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
    running: bool,
}

impl PositionTransition {
    /// Idle transition with the given timing.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            start: Vec3::ZERO,
            end: Vec3::ZERO,
            elapsed: Duration::ZERO,
            duration,
            easing,
            running: false,
        }
    }

    /// Begin (or restart) a tween from `start` to `end`.
    pub fn start(&mut self, start: Vec3, end: Vec3) {
        self.start = start;
        self.end = end;
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Move time forward by `delta` and return the new position, or `None`
    /// when idle.
    ///
    /// Elapsed time is clamped to the duration; once it gets there the
    /// tween stops and the exact end position is returned.
    pub fn advance(&mut self, delta: Duration) -> Option<Vec3> {
        if !self.running {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        if self.elapsed >= self.duration {
            self.running = false;
            return Some(self.end);
        }

        let eased = self.easing.evaluate(self.progress());
        Some(self.start.lerp(self.end, eased))
    }

    /// Stop without moving and rewind to the idle state.
    pub fn reset(&mut self) {
        self.start = Vec3::ZERO;
        self.end = Vec3::ZERO;
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Whether a tween is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Raw progress in [0, 1]. A zero-length tween counts as complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0)
    }

    /// Time spent in the current tween, always within [0, duration].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total tween length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing applied to progress.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Position the current tween started from.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        self.start
    }

    /// Position the current tween ends at.
    #[must_use]
    pub fn end_position(&self) -> Vec3 {
        self.end
    }
}

impl Default for PositionTransition {
    /// 500ms smoothstep.
    fn default() -> Self {
        Self::new(Duration::from_millis(500), EasingFunction::Smoothstep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn idle_transition_yields_nothing() {
        let mut t = PositionTransition::default();
        assert_eq!(t.advance(Duration::from_millis(16)), None);
        assert!(!t.is_running());
    }

    #[test]
    fn zero_delta_at_start_stays_on_start() {
        let mut t = PositionTransition::default();
        t.start(Vec3::X, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(t.advance(Duration::ZERO), Some(Vec3::X));
        assert!(t.is_running());
    }

    #[test]
    fn midpoint_follows_smoothstep() {
        let mut t =
            PositionTransition::new(Duration::from_secs(1), EasingFunction::Smoothstep);
        t.start(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));

        let p = t.advance(Duration::from_millis(250)).unwrap();
        let s = 0.25_f32 * 0.25 * (3.0 - 2.0 * 0.25);
        assert!(approx(p, Vec3::new(10.0 * s, 0.0, 0.0)));

        let p = t.advance(Duration::from_millis(250)).unwrap();
        assert!(approx(p, Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn finishes_exactly_on_end_and_clamps_elapsed() {
        let end = Vec3::new(0.1, 0.2, 0.3);
        let mut t =
            PositionTransition::new(Duration::from_millis(300), EasingFunction::Smoothstep);
        t.start(Vec3::new(7.0, -3.0, 1.0), end);

        assert!(t.advance(Duration::from_millis(299)).is_some());
        assert!(t.is_running());

        assert_eq!(t.advance(Duration::from_secs(5)), Some(end));
        assert!(!t.is_running());
        assert_eq!(t.elapsed(), t.duration());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn reaching_duration_exactly_finishes() {
        let mut t =
            PositionTransition::new(Duration::from_millis(100), EasingFunction::Linear);
        t.start(Vec3::ZERO, Vec3::ONE);
        assert_eq!(t.advance(Duration::from_millis(100)), Some(Vec3::ONE));
        assert!(!t.is_running());
    }

    #[test]
    fn zero_duration_finishes_on_first_advance() {
        let mut t = PositionTransition::new(Duration::ZERO, EasingFunction::Smoothstep);
        t.start(Vec3::ZERO, Vec3::Y);
        assert_eq!(t.advance(Duration::ZERO), Some(Vec3::Y));
        assert!(!t.is_running());
    }

    #[test]
    fn restart_overwrites_in_flight_tween() {
        let mut t =
            PositionTransition::new(Duration::from_secs(1), EasingFunction::Linear);
        t.start(Vec3::ZERO, Vec3::X);
        let _ = t.advance(Duration::from_millis(600));

        t.start(Vec3::new(0.6, 0.0, 0.0), Vec3::NEG_X);
        assert_eq!(t.elapsed(), Duration::ZERO);
        assert_eq!(t.start_position(), Vec3::new(0.6, 0.0, 0.0));
        assert_eq!(t.end_position(), Vec3::NEG_X);
    }

    #[test]
    fn huge_delta_saturates_and_finishes() {
        let mut t =
            PositionTransition::new(Duration::from_secs(1), EasingFunction::Linear);
        t.start(Vec3::ZERO, Vec3::X);
        let _ = t.advance(Duration::from_millis(10));
        assert_eq!(t.advance(Duration::MAX), Some(Vec3::X));
        assert_eq!(t.elapsed(), t.duration());
        assert!(!t.is_running());
    }
}
