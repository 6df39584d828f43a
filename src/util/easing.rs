//! Easing functions for carousel transitions.
//!
//! Provides the curves a [`PositionTransition`](crate::animation::PositionTransition)
//! can apply to its normalized progress: `smoothstep` for the eased scroll and
//! `linear` for constant-speed scrolling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Hermite smoothstep `t²(3−2t)`: zero velocity at both endpoints.
    Smoothstep,
}

impl EasingFunction {
    /// Default easing function: smoothstep, the carousel's scroll curve.
    pub const DEFAULT: EasingFunction = EasingFunction::Smoothstep;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
