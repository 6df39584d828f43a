//! Shared utilities for the carousel.
//!
//! Helpers for frame timing, easing curves and listener registration.

/// Scroll curves applied to transition progress.
pub mod easing;
/// Per-frame deltas for host loops.
pub mod frame_timing;
/// Observer registry behind the carousel notifications.
pub mod listeners;
