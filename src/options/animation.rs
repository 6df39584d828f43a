use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing of the scroll transition between selections.
pub struct AnimationOptions {
    /// Transition length in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub duration_secs: f32,
    /// Curve applied to transition progress: `smoothstep` (default) or
    /// `linear`.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Transition length. Negative or non-finite values count as zero.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.duration_secs.max(0.0))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_secs: 0.5,
            easing: EasingFunction::Smoothstep,
        }
    }
}
