use crate::slot::SlotId;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CarouselCommand`](crate::carousel::CarouselCommand)
/// values. Hit-testing is the host's job: a click arrives already resolved
/// to the slot under the cursor.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(&InputEvent::SlotClicked { slot }) {
///     carousel.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// Key code string in `winit::keyboard::KeyCode` debug format
        /// (`"ArrowRight"`, `"KeyD"`, ...).
        code: String,
    },
    /// The user clicked a display case.
    SlotClicked {
        /// The slot under the cursor.
        slot: SlotId,
    },
    /// Scroll wheel or swipe along the carousel axis.
    Scroll {
        /// Positive steps forward, negative steps back.
        delta: f32,
    },
}

impl InputEvent {
    /// Key press event.
    pub fn key(code: impl Into<String>) -> Self {
        Self::Key { code: code.into() }
    }
}
