//! Converts raw platform events into carousel commands.
//!
//! The `InputProcessor` owns the key-binding map and is the only thing that
//! sits between raw host events and
//! [`Carousel::execute`](crate::carousel::Carousel::execute).

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::carousel::CarouselCommand;
use crate::options::KeybindingOptions;

/// Maps [`InputEvent`]s to [`CarouselCommand`]s.
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    keybindings: KeybindingOptions,
}

impl InputProcessor {
    /// Processor using the given key bindings.
    #[must_use]
    pub fn new(keybindings: KeybindingOptions) -> Self {
        Self { keybindings }
    }

    /// Translate one event. Unbound keys and zero scroll produce nothing.
    #[must_use]
    pub fn handle_event(&self, event: &InputEvent) -> Option<CarouselCommand> {
        match event {
            InputEvent::Key { code } => {
                self.keybindings.lookup(code).map(action_command)
            }
            InputEvent::SlotClicked { slot } => {
                Some(CarouselCommand::ClickSlot(*slot))
            }
            InputEvent::Scroll { delta } => {
                if *delta > 0.0 {
                    Some(CarouselCommand::NextDisplay)
                } else if *delta < 0.0 {
                    Some(CarouselCommand::PreviousDisplay)
                } else {
                    None
                }
            }
        }
    }
}

fn action_command(action: KeyAction) -> CarouselCommand {
    match action {
        KeyAction::NextDisplay => CarouselCommand::NextDisplay,
        KeyAction::PreviousDisplay => CarouselCommand::PreviousDisplay,
    }
}
