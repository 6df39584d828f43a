//! The carousel's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a click
//! on a display case, or a programmatic call, can be represented as a
//! `CarouselCommand` and passed to
//! [`Carousel::execute`](super::Carousel::execute).

use glam::Vec3;

use crate::slot::SlotId;

/// A single carousel operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    /// Step the selection forward.
    NextDisplay,
    /// Step the selection back.
    PreviousDisplay,
    /// A display case was clicked: select it and notify click listeners.
    ClickSlot(SlotId),
    /// Re-base the resting position and animate toward it.
    SetTargetPosition(Vec3),
}
